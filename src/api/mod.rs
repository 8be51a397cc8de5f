//! The image customization document model.
//!
//! Every type here deserializes from the document's camelCase keys and
//! implements [`Validate`](crate::core::Validate) for its own invariants.
//! [`Config`] adds the rules that span several fields.

mod config;
mod identified_partition;
mod iso;
mod os;
mod reset;
mod scripts;
mod storage;
mod verity;

pub use config::Config;
pub use identified_partition::{IdType, IdentifiedPartition};
pub use iso::{Iso, KernelCommandLine};
pub use os::Os;
pub use reset::{ResetBootLoaderType, ResetPartitionsUuidsType};
pub use scripts::{Script, Scripts};
pub use storage::{Disk, Partition, PartitionTableType, Storage};
pub use verity::{CorruptionOption, Verity};
