use sha2::{Digest, Sha256};
use uuid::Uuid;

pub struct Sha256Hash {
    secret_key: String,
}

impl Sha256Hash {
    pub fn new(secret_key: &str) -> Self {
        pb_log::info(Some("⚡"), "Sha256Hash: Initializing component");

        Self {
            secret_key: secret_key.to_owned(),
        }
    }

    /// Signature over a payment: hex SHA-256 of the field values
    /// concatenated in field-name order (account_id, amount,
    /// transaction_id, user_id) followed by the shared secret key.
    pub fn payment_signature(
        &self,
        transaction_id: &Uuid,
        user_id: &Uuid,
        account_id: &Uuid,
        amount: &f64,
    ) -> String {
        let mut data = String::new();
        data.push_str(&account_id.to_string());
        data.push_str(&amount.to_string());
        data.push_str(&transaction_id.to_string());
        data.push_str(&user_id.to_string());
        data.push_str(&self.secret_key);

        hex::encode(Sha256::digest(data.as_bytes()))
    }

    pub fn verify_payment_signature(
        &self,
        signature: &str,
        transaction_id: &Uuid,
        user_id: &Uuid,
        account_id: &Uuid,
        amount: &f64,
    ) -> bool {
        signature == self.payment_signature(transaction_id, user_id, account_id, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (Uuid, Uuid, Uuid) {
        (
            Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c1").unwrap(),
            Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c2").unwrap(),
            Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c3").unwrap(),
        )
    }

    #[test]
    fn signature_is_deterministic() {
        let (transaction_id, user_id, account_id) = ids();
        let hash = Sha256Hash::new("secret");

        let first = hash.payment_signature(&transaction_id, &user_id, &account_id, &100.5);
        let second = hash.payment_signature(&transaction_id, &user_id, &account_id, &100.5);

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(hash.verify_payment_signature(&first, &transaction_id, &user_id, &account_id, &100.5));
    }

    #[test]
    fn signature_depends_on_every_field() {
        let (transaction_id, user_id, account_id) = ids();
        let hash = Sha256Hash::new("secret");
        let signature = hash.payment_signature(&transaction_id, &user_id, &account_id, &100.5);

        assert!(!hash.verify_payment_signature(
            &signature,
            &transaction_id,
            &user_id,
            &account_id,
            &100.6
        ));
        assert!(!hash.verify_payment_signature(
            &signature,
            &user_id,
            &transaction_id,
            &account_id,
            &100.5
        ));
    }

    #[test]
    fn signature_depends_on_secret_key() {
        let (transaction_id, user_id, account_id) = ids();

        let first =
            Sha256Hash::new("secret").payment_signature(&transaction_id, &user_id, &account_id, &1.0);
        let second =
            Sha256Hash::new("other").payment_signature(&transaction_id, &user_id, &account_id, &1.0);

        assert_ne!(first, second);
    }
}
