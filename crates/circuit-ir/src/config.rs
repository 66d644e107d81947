//! Compilation target configuration.

use core::{fmt, str::FromStr};

use thiserror::Error;

use crate::types::MachineType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported target triple: {0}")]
    UnsupportedTriple(String),
}

/// Supported target triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Triple {
    X86_64,
    Aarch64,
    Arm32,
}

impl Triple {
    pub fn as_str(self) -> &'static str {
        match self {
            Triple::X86_64 => "x86_64-unknown-linux-gnu",
            Triple::Aarch64 => "aarch64-unknown-linux-gnu",
            Triple::Arm32 => "arm-unknown-linux-gnu",
        }
    }

    pub fn is_64_bit(self) -> bool {
        !matches!(self, Triple::Arm32)
    }
}

impl FromStr for Triple {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x86_64-unknown-linux-gnu" => Ok(Triple::X86_64),
            "aarch64-unknown-linux-gnu" => Ok(Triple::Aarch64),
            "arm-unknown-linux-gnu" => Ok(Triple::Arm32),
            other => Err(ConfigError::UnsupportedTriple(other.to_string())),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-compilation settings shared by every stub built for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilationConfig {
    triple: Triple,
}

impl CompilationConfig {
    pub fn new(triple: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            triple: triple.parse()?,
        })
    }

    pub fn triple(&self) -> Triple {
        self.triple
    }

    pub fn is_64_bit(&self) -> bool {
        self.triple.is_64_bit()
    }

    /// Machine type of a pointer-sized integer on this target.
    pub fn arch_type(&self) -> MachineType {
        if self.is_64_bit() {
            MachineType::I64
        } else {
            MachineType::I32
        }
    }

    /// Replace `Arch` with the concrete pointer width; other types pass through.
    pub fn resolve(&self, machine_type: MachineType) -> MachineType {
        match machine_type {
            MachineType::Arch => self.arch_type(),
            other => other,
        }
    }
}

impl Default for CompilationConfig {
    fn default() -> Self {
        Self {
            triple: Triple::X86_64,
        }
    }
}
