// src/fetch.rs
//
// Paginated bulk fetch of every record in a table.

use std::thread;

use crate::{
    bitable::{AccessToken, BitableApi, PageRequest, RawRecord, TableRef},
    config::options::FetchOptions,
    error::{FetchError, TruncationWarning},
    progress::Progress,
};

/// Everything one pagination run produced.
#[derive(Debug)]
pub struct FetchOutcome {
    pub records: Vec<RawRecord>,
    /// Requests made (= pages received).
    pub pages: usize,
    /// Set when the page cap stopped us while the source still had more.
    pub truncated: Option<TruncationWarning>,
}

/// Walk the search cursor until the source runs dry or `opts.max_pages` is hit.
///
/// - A rejected page (non-zero `code`) or failed request aborts the whole run;
///   records from earlier pages are dropped.
/// - Hitting the cap with `has_more` still set is not an error: the records so
///   far come back with a [`TruncationWarning`].
pub fn fetch_all<A: BitableApi + ?Sized>(
    api: &A,
    token: &AccessToken,
    table: &TableRef,
    opts: &FetchOptions,
    progress: &mut dyn Progress,
) -> Result<FetchOutcome, FetchError> {
    let mut records: Vec<RawRecord> = Vec::new();
    let mut cursor: Option<String> = None;
    let mut has_more = true;
    let mut pages = 0usize;

    logf!("Fetch: Begin table={} page_size={} max_pages={}", table.table_id, opts.page_size, opts.max_pages);

    while has_more && pages < opts.max_pages {
        if pages > 0 && !opts.pause().is_zero() {
            thread::sleep(opts.pause()); // be polite
        }

        let page_no = pages + 1;
        progress.log(&format!("正在获取第 {page_no} 页数据..."));

        let request = PageRequest { page_token: cursor.as_deref(), page_size: opts.page_size };
        let resp = api
            .search_records(token, table, request)
            .map_err(|e| fail(page_no, e.to_string()))?;

        if resp.code != 0 {
            let msg = resp.msg.unwrap_or_else(|| s!("unknown error"));
            return Err(fail(page_no, format!("code {}: {}", resp.code, msg)));
        }

        let data = resp.data.unwrap_or_default();
        pages = page_no;
        logd!("Fetch: page={} items={} has_more={}", page_no, data.items.len(), data.has_more);

        records.extend(data.items);
        has_more = data.has_more;
        cursor = data.page_token.filter(|t| !t.is_empty());

        if has_more && cursor.is_none() {
            logw!("Fetch: page={} says has_more but carries no page_token", page_no);
        }

        progress.page_done(page_no, records.len());
    }

    let truncated = has_more.then(|| TruncationWarning { pages, records: records.len() });
    match &truncated {
        Some(w) => {
            logw!("Fetch: {}", w);
            progress.warn(&w.to_string());
        }
        None => logf!("Fetch: OK pages={} records={}", pages, records.len()),
    }

    Ok(FetchOutcome { records, pages, truncated })
}

fn fail(page: usize, message: String) -> FetchError {
    loge!("Fetch: page={} failed: {}", page, message);
    FetchError { page, message }
}
