pub mod certifications;
