pub mod abstract_index;
pub mod doi;
pub mod persist;
pub mod record;
pub mod ris;

pub use abstract_index::{decode_abstract, reconstruct_abstract, AbstractIndex, Position};
pub use record::BibRecord;
pub use ris::{create_ris_entry, RisTag};
