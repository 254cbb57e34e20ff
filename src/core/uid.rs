use uuid::Uuid;

/// Create a unique id in the format `XXXXXXXX-XXXX-XXXX-XXXXXXXXXXXX` (uppercase hex).
///
/// Used for message ids, payment-instruction ids and direct-debit end-to-end ids.
/// The result is 31 characters long, within the 35-character SEPA id limit.
pub fn create_uid() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}-{}-{}-{}", &hex[..8], &hex[8..12], &hex[12..16], &hex[16..28])
}

/// Check whether `id` has the shape produced by [`create_uid`].
pub fn is_uid(id: &str) -> bool {
    let groups: Vec<&str> = id.split('-').collect();
    groups.len() == 4
        && groups
            .iter()
            .zip([8, 4, 4, 12])
            .all(|(group, len)| {
                group.len() == len
                    && group
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
            })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_format() {
        let id = create_uid();
        assert_eq!(id.len(), 31);
        assert!(is_uid(&id), "unexpected id {id}");
    }

    #[test]
    fn uids_differ() {
        assert_ne!(create_uid(), create_uid());
    }

    #[test]
    fn rejects_foreign_shapes() {
        assert!(!is_uid(""));
        assert!(!is_uid("NOTPROVIDED"));
        assert!(!is_uid("0123abcd-0000-0000-000000000000"));
        assert!(!is_uid("01234567-0000-0000-0000-00000000"));
    }
}
