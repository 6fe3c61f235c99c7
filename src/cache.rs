//! Format code caching.

use lru::LruCache;
use std::cell::RefCell;
use std::num::NonZeroUsize;

use crate::ast::NumberFormat;
use crate::error::ParseError;

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(128) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

thread_local! {
    /// Per-thread cache of parsed format codes.
    static CACHE: RefCell<LruCache<String, NumberFormat>> = RefCell::new(LruCache::new(CACHE_SIZE));
}

/// Get or parse a format code, using the cache.
///
/// Parse failures are not cached.
pub fn get_or_parse(format_code: &str) -> Result<NumberFormat, ParseError> {
    CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if let Some(fmt) = cache.get(format_code) {
            return Ok(fmt.clone());
        }

        let fmt = NumberFormat::parse(format_code)?;
        cache.put(format_code.to_string(), fmt.clone());
        Ok(fmt)
    })
}
