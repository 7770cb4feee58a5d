// src/session.rs
//
// Token → fetch → normalize pipeline, and the per-session cache that runs it
// at most once until reset.

use crate::{
    bitable::{BitableApi, Credential, TableRef, get_token},
    config::{Settings, options::FetchOptions},
    error::{ConfigError, LoadError, LookupError, TruncationWarning},
    fetch::fetch_all,
    lookup::{LookupQuery, find_query},
    members::{MemberCollection, MemberProfile, Normalizer},
    progress::Progress,
};

/// Where to load from and how.
#[derive(Clone, Debug)]
pub struct Source {
    pub credential: Credential,
    pub table: TableRef,
    pub fetch: FetchOptions,
    pub normalizer: Normalizer,
}

impl Source {
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        Ok(Self {
            credential: settings.credential.clone(),
            table: settings.table.clone(),
            fetch: settings.fetch.clone(),
            normalizer: Normalizer::from_options(&settings.normalize)?,
        })
    }
}

/// Result of one full load.
#[derive(Debug)]
pub struct LoadReport {
    pub members: MemberCollection,
    pub pages: usize,
    pub truncated: Option<TruncationWarning>,
}

/// Authenticate, fetch every page, normalize. Either all of it or an error.
pub fn load_members<A: BitableApi + ?Sized>(
    api: &A,
    source: &Source,
    progress: &mut dyn Progress,
) -> Result<LoadReport, LoadError> {
    let res = run_pipeline(api, source, progress);
    match &res {
        Ok(r) => progress.log(&format!("成功加载 {} 条成员记录", r.members.len())),
        Err(e) => progress.log(&format!("加载失败: {e}")),
    }
    progress.finish();
    res
}

fn run_pipeline<A: BitableApi + ?Sized>(
    api: &A,
    source: &Source,
    progress: &mut dyn Progress,
) -> Result<LoadReport, LoadError> {
    progress.log("正在获取访问令牌...");
    let token = get_token(api, &source.credential)?;

    let outcome = fetch_all(api, &token, &source.table, &source.fetch, progress)?;
    let members = source.normalizer.normalize(&outcome.records);
    logf!("Load: {} records → {} profiles", outcome.records.len(), members.len());

    Ok(LoadReport { members, pages: outcome.pages, truncated: outcome.truncated })
}

/// Caller-owned cache: empty until the first lookup, read-only after, cleared by `reset`.
pub struct Session<A: BitableApi> {
    api: A,
    source: Source,
    members: Option<MemberCollection>,
    last_load: Option<LoadSummary>,
}

/// What the most recent load looked like (kept after the data for display).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadSummary {
    pub records: usize,
    pub pages: usize,
    pub truncated: Option<TruncationWarning>,
}

impl<A: BitableApi> Session<A> {
    pub fn new(api: A, source: Source) -> Self {
        Self { api, source, members: None, last_load: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.members.is_some()
    }

    pub fn last_load(&self) -> Option<LoadSummary> {
        self.last_load
    }

    /// Load on first use; afterwards return the cached collection untouched.
    pub fn ensure_loaded(&mut self, progress: &mut dyn Progress) -> Result<&MemberCollection, LoadError> {
        let members = match self.members.take() {
            Some(m) => m,
            None => {
                let report = load_members(&self.api, &self.source, progress)?;
                self.last_load = Some(LoadSummary {
                    records: report.members.len(),
                    pages: report.pages,
                    truncated: report.truncated,
                });
                report.members
            }
        };
        Ok(self.members.insert(members))
    }

    /// Validate input, load if needed, then exact-match.
    /// `Ok(None)` means "no such member".
    pub fn lookup(
        &mut self,
        name: &str,
        student_id: &str,
        progress: &mut dyn Progress,
    ) -> Result<Option<&MemberProfile>, LookupError> {
        let query = LookupQuery::new(name, student_id)?;
        let members = self.ensure_loaded(progress)?;
        let hit = find_query(members, &query);
        logf!("Lookup: found={}", hit.is_some());
        Ok(hit)
    }

    /// Drop the cached data; the next lookup fetches everything again.
    pub fn reset(&mut self) {
        if self.members.take().is_some() {
            logf!("Session: reset, cached members dropped");
        }
        self.last_load = None;
    }
}
