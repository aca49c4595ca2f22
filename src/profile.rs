use thiserror::Error;

/// Returned when a string doesn't name a [MemoryProfile].
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unrecognized memory profile `{0}`, must be one of: low, medium, high, ultra")]
pub struct ProfileParseError(pub String);

/// Named memory costs to calibrate against, from the clipaha research paper's strength levels.
///
/// Calibration only decides the iteration count, the memory cost has to be picked up front.
/// A profile is a shortcut for doing so, see [CalibrationRequest::from_profile](crate::CalibrationRequest::from_profile).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MemoryProfile {
    /// 192 MiB, for ancient devices like old smartphones, ebook readers or computers from the early 2000s.
    Low,
    /// 384 MiB, for computers from the mid-2000s and most recent smartphones.
    Medium,
    /// 1 GiB, for computers from the last 5 years.
    High,
    /// A bit less than 2 GiB, the most a browser will hand out. Needs at least 3 GiB of RAM.
    Ultra,
}

impl MemoryProfile {
    /// Memory cost in KiB, as argon2's m_cost expects it.
    pub const fn memory_cost(&self) -> u32 {
        match self {
            MemoryProfile::Low => 192 << 10,
            MemoryProfile::Medium => 384 << 10,
            MemoryProfile::High => 1 << 20,
            MemoryProfile::Ultra => (2 << 20) - (32 << 10),
        }
    }

    /// Degree of parallelism (p_cost). Always 1 so hashes stay reproducible across machines.
    pub const fn parallelism(&self) -> u32 {
        1
    }
}

impl TryFrom<&str> for MemoryProfile {
    type Error = ProfileParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "ultra" => Ok(Self::Ultra),
            _ => Err(ProfileParseError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for MemoryProfile {
    type Error = ProfileParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_try_from_str_case_insensitive() {
        let cases = [
            (["low", "lOw", "LOW"], MemoryProfile::Low),
            (["medium", "MeDIum", "MEDIUM"], MemoryProfile::Medium),
            (["high", "HIGH", "hIGh"], MemoryProfile::High),
            (["ultra", "ULTRA", "UltrA"], MemoryProfile::Ultra),
        ];

        for (inputs, expected) in cases {
            for input in inputs {
                assert_eq!(MemoryProfile::try_from(input), Ok(expected));
            }
        }
    }

    #[test]
    fn test_try_from_str_invalid() {
        for str in ["invalid", "", "ultrab", "bow", " low"] {
            let res = MemoryProfile::try_from(str);
            assert_eq!(res, Err(ProfileParseError(str.to_owned())));
        }
    }

    #[test]
    fn test_error_message_names_input() {
        let err = MemoryProfile::try_from("huge").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized memory profile `huge`, must be one of: low, medium, high, ultra"
        );
    }

    #[test]
    fn test_try_from_string() {
        assert_eq!(
            MemoryProfile::try_from("Invalid"),
            MemoryProfile::try_from("Invalid".to_string())
        );
        assert_eq!(
            MemoryProfile::try_from("high"),
            MemoryProfile::try_from("high".to_string())
        );
    }

    #[test]
    fn test_memory_costs() {
        assert_eq!(MemoryProfile::Low.memory_cost(), 196_608);
        assert_eq!(MemoryProfile::Medium.memory_cost(), 393_216);
        assert_eq!(MemoryProfile::High.memory_cost(), 1_048_576);
        assert_eq!(MemoryProfile::Ultra.memory_cost(), 2_064_384);
        assert_eq!(MemoryProfile::Ultra.parallelism(), 1);
    }
}
