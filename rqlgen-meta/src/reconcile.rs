/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Metadata reconciliation.
//!
//! Term ids are defined in two places: the protocol grammar and
//! `term_info.json`. The protocol is authoritative; this module brings the
//! metadata back in line with it.

use crate::schema::{TermInfo, TermMetadata};
use rqlgen_core::error::ProtocolError;
use rqlgen_proto::ProtocolDefinition;
use tracing::{info, warn};

/// Location of the term-type enumeration inside the protocol.
pub const TERM_TYPE_PATH: [&str; 2] = ["Term", "TermType"];

/// Synchronizes term metadata with the protocol's term-type block.
///
/// Terms missing from the metadata are appended with a minimal record, and
/// ids that drifted from the protocol are overwritten. Terms that no longer
/// exist in the protocol are kept as they are. The input is not modified;
/// compare the result with it to decide whether to persist.
///
/// # Errors
/// Returns `ProtocolError` if the protocol has no `Term.TermType` block.
pub fn reconcile(
    proto: &ProtocolDefinition,
    meta: &TermMetadata,
) -> Result<TermMetadata, ProtocolError> {
    let term_types = proto.block_at(&TERM_TYPE_PATH)?;
    let mut updated = meta.clone();

    for (name, id) in term_types.values() {
        if !updated.contains(name) {
            info!("Got new term {} with id {}", name, id);
            updated.insert(name, TermInfo::new(id));
        }
    }

    for (name, info) in updated.iter_mut() {
        match term_types.value(name) {
            Some(id) if id != info.id() => {
                warn!("{} changed from {} to {}", name, info.id(), id);
                info.set_id(id);
            }
            Some(_) => {}
            None => warn!("{} is not in the protocol anymore, keeping it", name),
        }
    }

    Ok(updated)
}
