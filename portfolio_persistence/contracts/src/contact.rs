use std::future::Future;

use portfolio_models::{
    contact::{ContactMessage, ContactMessageFilter, ContactMessageId},
    pagination::PaginationSlice,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns the number of contact messages matching the given filter.
    fn count(
        &self,
        txn: &mut Txn,
        filter: &ContactMessageFilter,
    ) -> impl Future<Output = anyhow::Result<u64>> + Send;

    /// Returns all contact messages matching the given filter and pagination
    /// slice, newest first.
    fn list(
        &self,
        txn: &mut Txn,
        filter: &ContactMessageFilter,
        pagination: PaginationSlice,
    ) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;

    fn get(
        &self,
        txn: &mut Txn,
        id: ContactMessageId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactMessage>>> + Send;

    fn create(
        &self,
        txn: &mut Txn,
        message: &ContactMessage,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Sets the read flag of a contact message. Returns `false` if the message
    /// does not exist.
    fn update_read(
        &self,
        txn: &mut Txn,
        id: ContactMessageId,
        is_read: bool,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn delete(
        &self,
        txn: &mut Txn,
        id: ContactMessageId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactRepository<Txn> {
    pub fn with_count(mut self, filter: ContactMessageFilter, result: u64) -> Self {
        self.expect_count()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(filter))
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list(
        mut self,
        filter: ContactMessageFilter,
        pagination: PaginationSlice,
        result: Vec<ContactMessage>,
    ) -> Self {
        self.expect_list()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(filter),
                mockall::predicate::eq(pagination),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get(mut self, id: ContactMessageId, result: Option<ContactMessage>) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(id))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(mut self, message: ContactMessage, result: anyhow::Result<()>) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(message))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_update_read(mut self, id: ContactMessageId, is_read: bool, result: bool) -> Self {
        self.expect_update_read()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(id),
                mockall::predicate::eq(is_read),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_delete(mut self, id: ContactMessageId, result: bool) -> Self {
        self.expect_delete()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(id))
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
