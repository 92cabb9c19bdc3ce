/// Filesystem adapters for file I/O operations
mod atomic_writer;
mod file_reader;
mod license_walker;
mod sha256_hasher;

pub use atomic_writer::AtomicFileWriter;
pub use file_reader::FileSystemReader;
pub use license_walker::WalkDirFinder;
pub use sha256_hasher::Sha256Hasher;
