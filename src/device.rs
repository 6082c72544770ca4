//! Compute device detection

use std::path::Path;

/// Device the inference runner is assumed to execute on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Cuda,
    Cpu,
}

impl Device {
    /// Detect the active device by probing for an NVIDIA device node
    pub fn detect() -> Self {
        if Path::new("/dev/nvidia0").exists() {
            Device::Cuda
        } else {
            Device::Cpu
        }
    }

    /// Wire name for the device, as reported by `GET /`
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Cuda => "cuda",
            Device::Cpu => "cpu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(Device::Cuda.as_str(), "cuda");
        assert_eq!(Device::Cpu.as_str(), "cpu");
    }
}
