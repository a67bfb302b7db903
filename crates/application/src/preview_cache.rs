use std::collections::HashMap;
use std::path::{Path, PathBuf};

use asset_shelf_domain::{PreviewHandle, PreviewImage};
use tracing::{debug, warn};

use crate::{ApplicationError, PreviewDecoder};

/// Path-keyed memo of decoded thumbnails. Entries are never evicted: a path
/// is decoded at most once for the lifetime of the cache, and a path that
/// failed to decode stays mapped to the empty handle.
pub struct PreviewCache {
    decoder: Box<dyn PreviewDecoder>,
    handles: HashMap<PathBuf, PreviewHandle>,
    decoded: Vec<(PathBuf, PreviewImage)>,
    placeholder: Option<PathBuf>,
    no_results: Option<PreviewHandle>,
}

impl PreviewCache {
    pub fn new(decoder: Box<dyn PreviewDecoder>) -> Self {
        Self {
            decoder,
            handles: HashMap::new(),
            decoded: Vec::new(),
            placeholder: None,
            no_results: None,
        }
    }

    /// Image shown on the synthetic entry of an empty listing.
    pub fn with_placeholder(mut self, placeholder: Option<PathBuf>) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn get(&mut self, path: &Path) -> Result<PreviewHandle, ApplicationError> {
        if let Some(handle) = self.handles.get(path) {
            return Ok(*handle);
        }

        let image = match self.decoder.decode_preview(path) {
            Ok(image) => image,
            Err(error) => {
                self.handles.insert(path.to_path_buf(), PreviewHandle::EMPTY);
                return Err(error);
            }
        };
        let handle =
            PreviewHandle::from_raw(PreviewHandle::FIRST_DECODED + self.decoded.len() as u64);
        debug!(path = %path.display(), handle = handle.get(), "decoded preview");
        self.decoded.push((path.to_path_buf(), image));
        self.handles.insert(path.to_path_buf(), handle);
        Ok(handle)
    }

    /// Like [`get`](Self::get), but a decode failure degrades to the empty
    /// handle instead of surfacing.
    pub fn get_or_empty(&mut self, path: &Path) -> PreviewHandle {
        match self.get(path) {
            Ok(handle) => handle,
            Err(error) => {
                warn!(path = %path.display(), %error, "preview unavailable");
                PreviewHandle::EMPTY
            }
        }
    }

    pub fn no_results(&mut self) -> PreviewHandle {
        if let Some(handle) = self.no_results {
            return handle;
        }

        let handle = match self.placeholder.clone() {
            Some(path) => match self.get(&path) {
                Ok(handle) => handle,
                Err(error) => {
                    warn!(path = %path.display(), %error, "placeholder preview unavailable");
                    PreviewHandle::NO_RESULTS
                }
            },
            None => PreviewHandle::NO_RESULTS,
        };
        self.no_results = Some(handle);
        handle
    }

    pub fn image(&self, handle: PreviewHandle) -> Option<&PreviewImage> {
        self.slot(handle).map(|(_, image)| image)
    }

    pub fn source_of(&self, handle: PreviewHandle) -> Option<&Path> {
        self.slot(handle).map(|(path, _)| path.as_path())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.handles.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.decoded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoded.is_empty()
    }

    fn slot(&self, handle: PreviewHandle) -> Option<&(PathBuf, PreviewImage)> {
        if !handle.is_decoded() {
            return None;
        }
        let index = usize::try_from(handle.get() - PreviewHandle::FIRST_DECODED).ok()?;
        self.decoded.get(index)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Decoder that records every path it is asked to decode and fails for
    /// paths containing "corrupt".
    #[derive(Default, Clone)]
    pub(crate) struct CountingDecoder {
        pub(crate) calls: Rc<RefCell<Vec<PathBuf>>>,
    }

    impl PreviewDecoder for CountingDecoder {
        fn decode_preview(&self, path: &Path) -> Result<PreviewImage, ApplicationError> {
            self.calls.borrow_mut().push(path.to_path_buf());
            if path.to_string_lossy().contains("corrupt") {
                return Err(ApplicationError::Decode(format!(
                    "unreadable image: {}",
                    path.display()
                )));
            }
            Ok(PreviewImage {
                width: 2,
                height: 1,
                rgba: vec![255; 8],
            })
        }
    }

    #[test]
    fn repeated_get_decodes_once() {
        let decoder = CountingDecoder::default();
        let mut cache = PreviewCache::new(Box::new(decoder.clone()));

        let first = cache.get(Path::new("/lib/a/preview.png")).expect("decode");
        let second = cache.get(Path::new("/lib/a/preview.png")).expect("cached");

        assert_eq!(first, second);
        assert_eq!(decoder.calls.borrow().len(), 1);
        assert!(cache.contains(Path::new("/lib/a/preview.png")));
    }

    #[test]
    fn distinct_paths_get_distinct_handles() {
        let mut cache = PreviewCache::new(Box::new(CountingDecoder::default()));
        let a = cache.get(Path::new("/a.png")).expect("decode");
        let b = cache.get(Path::new("/b.png")).expect("decode");

        assert_ne!(a, b);
        assert!(a.is_decoded() && b.is_decoded());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.source_of(b), Some(Path::new("/b.png")));
        assert_eq!(cache.image(a).map(|image| image.width), Some(2));
    }

    #[test]
    fn decode_failure_is_visible_but_degradable() {
        let mut cache = PreviewCache::new(Box::new(CountingDecoder::default()));
        let path = Path::new("/lib/corrupt.png");

        assert!(matches!(cache.get(path), Err(ApplicationError::Decode(_))));
        assert_eq!(cache.get_or_empty(path), PreviewHandle::EMPTY);
        assert!(cache.is_empty());
    }

    #[test]
    fn failed_decode_is_not_retried() {
        let decoder = CountingDecoder::default();
        let mut cache = PreviewCache::new(Box::new(decoder.clone()));
        let path = Path::new("/lib/Item/corrupt.png");

        for _ in 0..3 {
            assert_eq!(cache.get_or_empty(path), PreviewHandle::EMPTY);
        }

        assert_eq!(decoder.calls.borrow().len(), 1);
        assert!(cache.contains(path));
        assert_eq!(cache.get(path).expect("remembered"), PreviewHandle::EMPTY);
        assert!(cache.is_empty());
    }

    #[test]
    fn reserved_handles_have_no_image() {
        let cache = PreviewCache::new(Box::new(CountingDecoder::default()));
        assert!(cache.image(PreviewHandle::EMPTY).is_none());
        assert!(cache.source_of(PreviewHandle::NO_RESULTS).is_none());
    }

    #[test]
    fn no_results_without_placeholder_is_shared_handle() {
        let mut cache = PreviewCache::new(Box::new(CountingDecoder::default()));
        assert_eq!(cache.no_results(), PreviewHandle::NO_RESULTS);
    }

    #[test]
    fn no_results_placeholder_is_decoded_once() {
        let decoder = CountingDecoder::default();
        let mut cache = PreviewCache::new(Box::new(decoder.clone()))
            .with_placeholder(Some(PathBuf::from("/addon/empty.png")));

        let first = cache.no_results();
        let second = cache.no_results();

        assert!(first.is_decoded());
        assert_eq!(first, second);
        assert_eq!(decoder.calls.borrow().len(), 1);
    }

    #[test]
    fn broken_placeholder_falls_back_to_shared_handle() {
        let mut cache = PreviewCache::new(Box::new(CountingDecoder::default()))
            .with_placeholder(Some(PathBuf::from("/addon/corrupt.png")));
        assert_eq!(cache.no_results(), PreviewHandle::NO_RESULTS);
    }
}
