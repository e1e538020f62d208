pub mod interaction;
pub mod prompt;
pub mod registry;
pub mod viewer;

pub use interaction::{DiagramLayout, InteractionGraph, PALETTE};
pub use registry::{
    AvrPartner, GeneRecord, Registry
}; // Re-export the registry types for external use
