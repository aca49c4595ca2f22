use argon2::{
    password_hash::{Error, SaltString},
    Algorithm, Argon2, Params, ParamsBuilder, PasswordHasher, Version,
};

/// Salt used for every calibration hash. Only the cost matters, so it's constant.
const CALIBRATION_SALT: &[u8] = b"argon2-calibrate";

/// A password hash function whose cost can be tuned, as seen by the calibrator.
///
/// Implementations only need to do the work, the output is thrown away.
/// Any error is handed back to the caller of [calibrate](crate::calibrate) as is.
pub trait Hasher {
    type Error;

    fn hash(
        &self,
        iterations: u32,
        memory_cost: u32,
        parallelism: u32,
        secret: &[u8],
    ) -> Result<(), Self::Error>;
}

impl<H: Hasher + ?Sized> Hasher for &H {
    type Error = H::Error;

    fn hash(
        &self,
        iterations: u32,
        memory_cost: u32,
        parallelism: u32,
        secret: &[u8],
    ) -> Result<(), Self::Error> {
        (**self).hash(iterations, memory_cost, parallelism, secret)
    }
}

/// [Hasher] backed by the `argon2` crate.
///
/// `iterations` becomes t_cost, `memory_cost` is m_cost in KiB and `parallelism` is p_cost.
/// Costs the argon2 crate refuses (e.g. less than 8 KiB of memory per lane) come back as its error.
///
/// # Examples
/// ```
/// use argon2_calibrate::{Argon2Hasher, Hasher};
///
/// let hasher = Argon2Hasher::default();
/// assert!(hasher.hash(1, 64, 1, b"password").is_ok());
/// assert!(hasher.hash(0, 64, 1, b"password").is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Argon2Hasher {
    algorithm: Algorithm,
    version: Version,
}

impl Argon2Hasher {
    pub const fn new(algorithm: Algorithm, version: Version) -> Self {
        Self { algorithm, version }
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub const fn version(&self) -> Version {
        self.version
    }
}

impl Default for Argon2Hasher {
    /// Argon2id, version 0x13.
    fn default() -> Self {
        Self::new(Algorithm::Argon2id, Version::V0x13)
    }
}

impl Hasher for Argon2Hasher {
    type Error = Error;

    fn hash(
        &self,
        iterations: u32,
        memory_cost: u32,
        parallelism: u32,
        secret: &[u8],
    ) -> Result<(), Error> {
        let params: Params = ParamsBuilder::new()
            .t_cost(iterations)
            .m_cost(memory_cost)
            .p_cost(parallelism)
            .build()?;

        let salt = SaltString::encode_b64(CALIBRATION_SALT)?;
        let argon2 = Argon2::new(self.algorithm, self.version, params);

        argon2.hash_password(secret, salt.as_salt())?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_argon2id() {
        let hasher = Argon2Hasher::default();

        assert_eq!(hasher.algorithm(), Algorithm::Argon2id);
        assert_eq!(hasher.version(), Version::V0x13);
    }

    #[test]
    fn test_hash_all_algorithms() -> Result<(), Error> {
        for algorithm in [Algorithm::Argon2d, Algorithm::Argon2i, Algorithm::Argon2id] {
            Argon2Hasher::new(algorithm, Version::V0x13).hash(2, 64, 2, b"password")?;
        }

        Ok(())
    }

    #[test]
    fn test_invalid_costs_are_errors() {
        let hasher = Argon2Hasher::default();

        assert!(hasher.hash(0, 64, 1, b"password").is_err(), "t_cost of 0");
        assert!(hasher.hash(1, 4, 1, b"password").is_err(), "m_cost below 8 KiB");
        assert!(hasher.hash(1, 64, 0, b"password").is_err(), "p_cost of 0");
    }

    #[test]
    fn test_reference_forwards() {
        let hasher = Argon2Hasher::default();
        let by_ref = &hasher;

        assert_eq!(
            by_ref.hash(0, 64, 1, b"password"),
            hasher.hash(0, 64, 1, b"password")
        );
    }
}
