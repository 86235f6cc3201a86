use mongodb::{
    bson::{doc, DateTime},
    Collection, Database,
};
use rand::Rng;

use crate::errors::Result;
use crate::models::otp::{ContactMethod, OtpPurpose, OtpRecord};

const OTP_COLLECTION: &str = "otps";

/// Short-lived one-time-passcode ledger backed by the `otps` collection.
#[derive(Clone)]
pub struct OTPService {
    db: Database,
}

impl OTPService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<OtpRecord> {
        self.db.collection(OTP_COLLECTION)
    }

    // 6-digit code from the thread-local CSPRNG
    pub fn generate_otp() -> String {
        let mut rng = rand::thread_rng();
        format!("{:06}", rng.gen_range(0..1_000_000))
    }

    /// Generate a code for the subject and store the ledger entry.
    /// Several pending codes may coexist for the same subject; each stays
    /// valid until its own expiry. The returned code is for out-of-band
    /// delivery only and must never end up in a response body.
    pub async fn issue(
        &self,
        method: ContactMethod,
        subject: &str,
        purpose: OtpPurpose,
    ) -> Result<String> {
        let code = Self::generate_otp();
        let record = OtpRecord::new(code.clone(), method, subject.to_string(), purpose);
        self.collection().insert_one(&record).await?;
        Ok(code)
    }

    /// Single-use verification: match method + subject + exact code with
    /// the expiry still ahead, consuming the record on success. Wrong and
    /// expired codes come back as the same `None`.
    pub async fn verify(
        &self,
        method: ContactMethod,
        subject: &str,
        candidate: &str,
    ) -> Result<Option<OtpRecord>> {
        let filter = doc! {
            "code": candidate,
            "method": method.to_string(),
            "subject": subject,
            "expires_at": { "$gt": DateTime::now() },
        };

        // find-and-delete keeps lookup and consumption one atomic step
        let record = self.collection().find_one_and_delete(filter).await?;
        Ok(record)
    }

    /// Drop expired, never-verified entries. The store's TTL monitor does
    /// this too, but only on its own schedule.
    pub async fn reap_expired(&self) -> Result<u64> {
        let result = self
            .collection()
            .delete_many(doc! { "expires_at": { "$lt": DateTime::now() } })
            .await?;
        Ok(result.deleted_count)
    }

    /// Periodic sweep, detached from request handling. Spawned once at
    /// startup and never joined.
    pub fn spawn_reaper(self, interval_secs: u64) {
        tokio::spawn(async move {
            let mut ticker =
                tokio::time::interval(std::time::Duration::from_secs(interval_secs));
            loop {
                ticker.tick().await;
                match self.reap_expired().await {
                    Ok(0) => {}
                    Ok(n) => tracing::debug!("reaped {} expired OTP records", n),
                    Err(e) => tracing::error!("OTP reaper sweep failed: {}", e),
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_are_six_decimal_digits() {
        for _ in 0..200 {
            let code = OTPService::generate_otp();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn generated_codes_vary() {
        // 32 draws from a million-value space colliding into one value
        // would mean the RNG is broken
        let mut seen = std::collections::HashSet::new();
        for _ in 0..32 {
            seen.insert(OTPService::generate_otp());
        }
        assert!(seen.len() > 1);
    }
}
