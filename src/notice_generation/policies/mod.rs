mod license_canonicalization;

pub use license_canonicalization::LicenseCanonicalization;
