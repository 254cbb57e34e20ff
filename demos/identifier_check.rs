use sepakit::core::*;
use sepakit::directory::{BankDirectory, InMemoryDirectory, title_case};
use sepakit::validation::Validator;
use sepakit::validation::checksum::mod97_check_digits;

const DIRECTORY: &str = "\
GENODE61LAH;VOLKSBANK LAHR EG
SOLADES1OFG;SPARKASSE OFFENBURG/ORTENAU
BKAUATWWXXX;UNICREDIT BANK AUSTRIA AG
";

fn main() {
    let mut validator = Validator::with_defaults();
    let catalog = MessageCatalog::german();
    let directory = InMemoryDirectory::from_lines(DIRECTORY);

    // ── IBAN ──────────────────────────────────────────────────────────
    println!("=== IBAN ===");
    for input in ["de89 3704 0044 0532 0130 00", "DE21682900000009215808", "NL45SNSB0787754390"] {
        let mut iban = input.to_string();
        match validator.validate_iban(&mut iban) {
            Ok(()) => println!("  {iban}: ok"),
            Err(e) => println!("  {iban}: {}", catalog.identifier_message(e.code())),
        }
    }

    // Registering a country extends the supported set
    if let Err(e) = validator.registry_mut().register_builtin("NL") {
        println!("  registration failed: {e}");
    }
    let mut iban = "NL45SNSB0787754390".to_string();
    println!("  {iban} after registering NL: {:?}", validator.validate_iban(&mut iban));

    // Check digits for a German account body
    let body = "370400440532013000";
    println!("  DE{}{body}", mod97_check_digits(body, "DE"));

    // ── BIC ───────────────────────────────────────────────────────────
    println!("\n=== BIC ===");
    for input in ["genode61lah", "BKAUATWW", "GEN0DE61LAH"] {
        let mut bic = input.to_string();
        match validator.validate_bic(&mut bic) {
            Ok(()) => {
                let name = directory.name_for_bic(&bic).map(title_case).unwrap_or_default();
                println!("  {bic}: ok {name}");
            }
            Err(e) => println!("  {bic}: {}", catalog.identifier_message(e.code())),
        }
    }

    // ── Creditor Identifier ───────────────────────────────────────────
    println!("\n=== CI ===");
    for input in ["DE98ZZZ09999999999", "BE69ZZZ050D000000008", "BE68ZZZ01234567890"] {
        let mut ci = input.to_string();
        match validator.validate_ci(&mut ci) {
            Ok(()) => println!("  {ci}: ok"),
            Err(e) => println!("  {ci}: {}", catalog.identifier_message(e.code())),
        }
    }
}
