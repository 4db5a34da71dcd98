/// Storage-agnostic errors raised by repository adapters.
///
/// Driver details never cross this boundary: adapters collapse them into one of
/// these variants so use cases can decide between "not found", "conflict" and
/// "internal" without knowing which database sits underneath.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A uniqueness constraint rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}
