// crates/usecase/src/paginator.rs
use std::{fmt, sync::Arc};

use log::{debug, trace};
use page_range_domain::{PageLayout, PageRequest, Pagination, PaginatorConfig};
use page_range_ports::{ItemCounter, ItemSlicer};
use page_range_shared_kernel::{DomainError, ItemCount, PageNumber, PaginateError, ProviderKind};

type SharedCounter<E> = Arc<dyn ItemCounter<Error = E>>;
type SharedSlicer<T, E> = Arc<dyn ItemSlicer<Item = T, Error = E>>;

/// Turns a requested page number into a [`Pagination`] using two providers:
/// one that counts the items and one that fetches a page of them.
///
/// The paginator holds no mutable state; clones share the same providers and
/// can be used from several threads at once.
pub struct Paginator<T, E> {
    config: PaginatorConfig,
    counter: Option<SharedCounter<E>>,
    slicer: Option<SharedSlicer<T, E>>,
}

impl<T, E> Paginator<T, E> {
    /// A paginator without providers; attach them with
    /// [`with_counter`](Self::with_counter) and [`with_slicer`](Self::with_slicer).
    pub fn new(config: PaginatorConfig) -> Self {
        Self { config, counter: None, slicer: None }
    }

    pub fn with_providers<C, S>(config: PaginatorConfig, counter: C, slicer: S) -> Self
    where
        C: ItemCounter<Error = E> + 'static,
        S: ItemSlicer<Item = T, Error = E> + 'static,
    {
        Self::new(config).with_counter(counter).with_slicer(slicer)
    }

    #[must_use]
    pub fn with_counter<C>(mut self, counter: C) -> Self
    where
        C: ItemCounter<Error = E> + 'static,
    {
        self.counter = Some(Arc::new(counter));
        self
    }

    #[must_use]
    pub fn with_slicer<S>(mut self, slicer: S) -> Self
    where
        S: ItemSlicer<Item = T, Error = E> + 'static,
    {
        self.slicer = Some(Arc::new(slicer));
        self
    }

    pub const fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Resolve `requested_page` (1-based) into a page of items.
    ///
    /// # Errors
    ///
    /// - [`DomainError::MissingProvider`] when a provider was never attached.
    /// - [`DomainError::InvalidPage`] when `requested_page <= 0`.
    /// - [`PaginateError::Provider`] with the provider's own error when
    ///   counting or slicing fails.
    ///
    /// Neither provider is called when one of the first two checks fails.
    pub fn paginate(&self, requested_page: i64) -> Result<Pagination<T>, PaginateError<E>> {
        let (counter, slicer) = self.providers()?;
        let requested = PageNumber::try_from(requested_page)?;
        Self::run(&self.config, counter, slicer, requested)
    }

    /// Same as [`paginate`](Self::paginate) for an already validated request.
    pub fn paginate_request(&self, request: PageRequest) -> Result<Pagination<T>, PaginateError<E>> {
        let (counter, slicer) = self.providers()?;
        Self::run(&self.config, counter, slicer, request.page())
    }

    fn providers(&self) -> Result<(&SharedCounter<E>, &SharedSlicer<T, E>), DomainError> {
        let counter = self
            .counter
            .as_ref()
            .ok_or(DomainError::MissingProvider { provider: ProviderKind::ItemCounter })?;
        let slicer = self
            .slicer
            .as_ref()
            .ok_or(DomainError::MissingProvider { provider: ProviderKind::ItemSlicer })?;
        Ok((counter, slicer))
    }

    fn run(
        config: &PaginatorConfig,
        counter: &SharedCounter<E>,
        slicer: &SharedSlicer<T, E>,
        requested: PageNumber,
    ) -> Result<Pagination<T>, PaginateError<E>> {
        trace!("counting items for page {requested}");
        let total = counter.count().map_err(PaginateError::Provider)?;

        let layout = PageLayout::resolve(ItemCount::new(total), requested, config);
        if layout.was_clamped() {
            debug!(
                "requested page {requested} is past the last page, using {}",
                layout.total_pages
            );
        }

        trace!("slicing items offset={} limit={}", layout.offset(), layout.limit());
        let items = slicer
            .slice(layout.offset(), layout.limit())
            .map_err(PaginateError::Provider)?;

        debug!(
            "page {}/{} with {} item(s) of {} total, navigation {}..={}",
            layout.current_page,
            layout.total_pages,
            items.len(),
            layout.total_items,
            layout.window.first(),
            layout.window.last()
        );
        Ok(Pagination::from_layout(&layout, items))
    }
}

impl<T, E> Default for Paginator<T, E> {
    fn default() -> Self {
        Self::new(PaginatorConfig::default())
    }
}

impl<T, E> Clone for Paginator<T, E> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            counter: self.counter.clone(),
            slicer: self.slicer.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Paginator<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("config", &self.config)
            .field("has_counter", &self.counter.is_some())
            .field("has_slicer", &self.slicer.is_some())
            .finish()
    }
}
