use std::sync::Arc;

use chrono::Local;
use rust_decimal_macros::dec;
use sepakit::core::*;
use sepakit::document::{Document, PaymentInstructionBuilder, TransactionBuilder};
use sepakit::validation::Validator;

fn main() {
    let validator = Arc::new(Validator::with_defaults());
    let catalog = MessageCatalog::english();

    // ── 1. Document and group header ──────────────────────────────────
    let mut doc = Document::new(validator, TransactionType::DirectDebit).with_version(SepaVersion::V30);
    let message_id = doc.create_group_header("Musterverein e.V.").to_string();
    println!("Document {} ({})", message_id, doc.pain_version());

    // ── 2. Creditor payment instruction ───────────────────────────────
    let pmt = PaymentInstructionBuilder::new(&doc)
        .name("Musterverein e.V.")
        .iban("DE71 6645 0050 0070 1435 59")
        .bic("SOLADES1OFG")
        .ci("DE79 ZZZ 0123 4567 890")
        .sequence_type(SequenceType::Recurring)
        .build();
    let handle = match doc.add_payment_instruction(pmt) {
        Ok(handle) => handle,
        Err(e) => {
            println!("Payment instruction rejected: {}", catalog.payment_info_message(e, "; "));
            return;
        }
    };

    // ── 3. Debtor transactions ────────────────────────────────────────
    let members = [
        ("Max Mustermann", "DE11682900000009215808", "GENODE61LAH", dec!(104.45)),
        ("Erika Musterfrau", "AT611904300234573201", "BKAUATWW", dec!(205.67)),
        ("Ohne Betrag", "DE11682900000009215808", "GENODE61LAH", dec!(0)),
    ];
    for (i, (name, iban, bic, value)) in members.into_iter().enumerate() {
        let tx = TransactionBuilder::new(TransactionType::DirectDebit)
            .name(name)
            .iban(iban)
            .bic(bic)
            .value(value)
            .description("Mitgliedsbeitrag 2024")
            .mandate_id(&format!("MV-{:04}", i + 1))
            .date_of_signature("2018-04-03")
            .build();
        match doc.add_transaction(&handle, tx) {
            Ok(tx) => println!("  + {} {} EUR ({})", tx.name, tx.formatted_value(), tx.payment_id),
            Err(e) => println!("  - {}: {}", name, catalog.transaction_message(e, "; ")),
        }
    }

    // ── 4. Summary ────────────────────────────────────────────────────
    let pmt = doc.instruction(&handle);
    println!("\nCollection date: {}", pmt.collection_date(Local::now().date_naive()));
    println!("Transactions:    {}", doc.tx_count());
    println!("Control sum:     {}", doc.totals().formatted_sum());
    println!("Rejected:        {}", doc.invalid_count());
}
