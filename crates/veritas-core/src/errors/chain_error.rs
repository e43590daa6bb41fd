/// Provenance chain lifecycle violations. Always reported, never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainStateError {
    #[error("cannot append to closed provenance chain {chain_id}")]
    AppendToClosed { chain_id: String },

    #[error("provenance chain {chain_id} is already closed")]
    AlreadyClosed { chain_id: String },
}
