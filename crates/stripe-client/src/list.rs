//! Cursor pagination over list endpoints

use std::collections::VecDeque;

use futures::{Stream, TryStreamExt, stream};
use reqwest::Method;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    backend::{BackendClient, StripeRequest},
    error::Result,
    form::FormValues,
    params::ListParams,
};

const STARTING_AFTER: &str = "starting_after";
const ENDING_BEFORE: &str = "ending_before";

/// Anything returned by the API that carries an id
pub trait Object {
    fn id(&self) -> &str;
}

/// Metadata envelope of a list response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListMeta {
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
    pub url: String,
}

/// One page of a list endpoint
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct List<T> {
    #[serde(flatten)]
    pub meta: ListMeta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Lazy iterator over every item of a list endpoint.
///
/// No request is made until the first call to [`next`](Self::next). Pages
/// are fetched while the server reports `has_more`; when it also reports a
/// `total_count` iteration stops after that many items. Once finished, or
/// after yielding an error, the iterator stays exhausted.
pub struct ListIter<T> {
    client: BackendClient,
    path: String,
    form: FormValues,
    stripe_account: Option<String>,
    backward: bool,
    single: bool,
    values: VecDeque<T>,
    meta: Option<ListMeta>,
    last_id: Option<String>,
    yielded: u64,
    done: bool,
}

impl<T> ListIter<T>
where
    T: DeserializeOwned + Object + Send,
{
    pub(crate) fn new(
        client: BackendClient,
        path: &str,
        form: FormValues,
        params: &ListParams,
    ) -> Self {
        Self {
            client,
            path: path.to_string(),
            form,
            stripe_account: params.stripe_account.clone(),
            backward: params.ending_before.is_some(),
            single: params.single,
            values: VecDeque::new(),
            meta: None,
            last_id: None,
            yielded: 0,
            done: false,
        }
    }

    /// Metadata of the most recently fetched page
    pub fn meta(&self) -> Option<&ListMeta> {
        self.meta.as_ref()
    }

    /// Number of items yielded so far
    pub fn yielded(&self) -> u64 {
        self.yielded
    }

    pub async fn next(&mut self) -> Option<Result<T>> {
        if self.done {
            return None;
        }

        let total = self.meta.as_ref().and_then(|m| m.total_count);
        if total.is_some_and(|total| self.yielded >= u64::from(total)) {
            self.done = true;
            return None;
        }

        if self.values.is_empty() {
            let fetch = match &self.meta {
                None => true,
                Some(meta) => meta.has_more && !self.single,
            };
            if !fetch {
                self.done = true;
                return None;
            }
            if let Err(e) = self.fetch_page().await {
                self.done = true;
                return Some(Err(e));
            }
        }

        match self.values.pop_front() {
            Some(item) => {
                self.last_id = Some(item.id().to_string());
                self.yielded += 1;
                Some(Ok(item))
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    async fn fetch_page(&mut self) -> Result<()> {
        if let Some(id) = &self.last_id {
            let cursor = if self.backward {
                ENDING_BEFORE
            } else {
                STARTING_AFTER
            };
            self.form.set(cursor, id.clone());
        }

        debug!("Fetching list page: {} after {} items", self.path, self.yielded);

        let request = StripeRequest {
            form: self.form.clone(),
            stripe_account: self.stripe_account.clone(),
            ..StripeRequest::new(Method::GET, &self.path, self.client.key())
        };
        let page: List<T> = self.client.send(request).await?;

        let mut data = page.data;
        if self.backward {
            // pages arrive in forward order even when walking backwards
            data.reverse();
        }
        self.values = data.into();
        self.meta = Some(page.meta);
        Ok(())
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + Send {
        stream::unfold(self, |mut iter| async move {
            iter.next().await.map(|item| (item, iter))
        })
    }

    /// Drain every remaining item, stopping at the first error
    pub async fn collect_all(self) -> Result<Vec<T>> {
        self.into_stream().try_collect().await
    }
}
