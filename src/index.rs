//! Safe wrapper over the engine index handle.

use std::ffi::{CStr, CString};
use std::path::{Path, PathBuf};
use std::ptr;

use tracing::{debug, warn};

use crate::error::UsearchError;
use crate::ffi;
use crate::options::IndexOptions;
use crate::scalar::{ScalarKind, VectorScalar};

/// A single search hit: stored key and distance to the query.
///
/// Lower distance means higher similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub key: u64,
    pub distance: f32,
}

/// Converts an engine diagnostic into a Result.
///
/// The engine hands back static storage; the text is copied here and
/// never freed.
fn check(error: ffi::UsearchErrorT) -> Result<(), UsearchError> {
    if error.is_null() {
        return Ok(());
    }
    let msg = unsafe { CStr::from_ptr(error) }
        .to_string_lossy()
        .into_owned();
    Err(UsearchError::Engine(msg))
}

fn c_path(path: &Path) -> Result<CString, UsearchError> {
    CString::new(path.as_os_str().as_encoded_bytes())
        .map_err(|_| UsearchError::InvalidPath(path.display().to_string()))
}

/// One approximate-nearest-neighbor index owned by the engine.
///
/// An `Index` owns exactly one engine-side allocation, released when it
/// is dropped, on every exit path. Operations are direct blocking calls
/// into the engine.
///
/// Whether one handle tolerates concurrent calls is an engine property
/// this layer does not promise, so `Index` is `Send` but not `Sync`;
/// wrap it in a lock to share between threads.
#[derive(Debug)]
pub struct Index {
    handle: ffi::UsearchIndexT,
    path: Option<PathBuf>,
}

// The handle can move between threads. Concurrent use of a single
// handle is not guaranteed by the engine, so no Sync.
unsafe impl Send for Index {}

impl Index {
    /// Creates an empty index from the given options.
    ///
    /// Dimensions must be positive and the quantization must be one of
    /// the engine's known kinds; both are checked here before the engine
    /// is asked to allocate.
    pub fn new(options: &IndexOptions) -> Result<Self, UsearchError> {
        if options.dimensions == 0 {
            return Err(UsearchError::InvalidDimensions(0));
        }
        if options.quantization == ScalarKind::Unknown {
            return Err(UsearchError::UnsupportedScalar(ScalarKind::Unknown));
        }
        let index = Self::init(options)?;
        debug!(
            dimensions = options.dimensions,
            connectivity = options.connectivity,
            "index created"
        );
        Ok(index)
    }

    /// Restores an index persisted with [`save`](Self::save).
    ///
    /// The image is copied into process memory; the file is not needed
    /// afterwards.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, UsearchError> {
        let mut index = Self::init(&IndexOptions::default())?;
        index.load(path.as_ref())?;
        Ok(index)
    }

    /// Opens a persisted index by memory-mapping the file.
    ///
    /// Unlike [`from_file`](Self::from_file) no copy is made: the index
    /// reads from the file for as long as it lives, so the file must stay
    /// accessible and unmodified. The mapped data is read-only.
    pub fn from_view(path: impl AsRef<Path>) -> Result<Self, UsearchError> {
        let mut index = Self::init(&IndexOptions::default())?;
        index.view(path.as_ref())?;
        Ok(index)
    }

    // Raw init. Dimension validation is the caller's: load targets start
    // unconfigured and take their geometry from the image.
    fn init(options: &IndexOptions) -> Result<Self, UsearchError> {
        let raw = options.to_ffi();
        let mut error: ffi::UsearchErrorT = ptr::null();
        let handle = unsafe { ffi::usearch_init(&raw, &mut error) };
        check(error)?;
        Ok(Self { handle, path: None })
    }

    /// Number of vectors currently stored.
    pub fn size(&self) -> Result<usize, UsearchError> {
        let mut error: ffi::UsearchErrorT = ptr::null();
        let size = unsafe { ffi::usearch_size(self.handle, &mut error) };
        check(error)?;
        Ok(size)
    }

    /// Number of vector slots currently reserved. Always at least
    /// [`size`](Self::size).
    pub fn capacity(&self) -> Result<usize, UsearchError> {
        let mut error: ffi::UsearchErrorT = ptr::null();
        let capacity = unsafe { ffi::usearch_capacity(self.handle, &mut error) };
        check(error)?;
        Ok(capacity)
    }

    /// Dimensionality fixed at creation (or taken from a loaded image).
    pub fn dimensions(&self) -> Result<usize, UsearchError> {
        let mut error: ffi::UsearchErrorT = ptr::null();
        let dimensions = unsafe { ffi::usearch_dimensions(self.handle, &mut error) };
        check(error)?;
        Ok(dimensions)
    }

    /// Graph fan-out the index was built with.
    pub fn connectivity(&self) -> Result<usize, UsearchError> {
        let mut error: ffi::UsearchErrorT = ptr::null();
        let connectivity = unsafe { ffi::usearch_connectivity(self.handle, &mut error) };
        check(error)?;
        Ok(connectivity)
    }

    /// True if no vectors are stored.
    pub fn is_empty(&self) -> Result<bool, UsearchError> {
        Ok(self.size()? == 0)
    }

    /// Pre-allocates storage for at least `capacity` vectors. Never
    /// shrinks below the current size.
    ///
    /// The engine also grows on demand, but growing mid-insertion is
    /// costly; reserve up front when the count is known.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), UsearchError> {
        let mut error: ffi::UsearchErrorT = ptr::null();
        unsafe { ffi::usearch_reserve(self.handle, capacity, &mut error) };
        check(error)
    }

    /// Stores `vector` under `key`.
    ///
    /// The engine reads exactly [`dimensions`](Self::dimensions) elements
    /// from the buffer, so the length is checked here before anything
    /// crosses the boundary. Key uniqueness is the engine's to enforce.
    pub fn add<T: VectorScalar>(&mut self, key: u64, vector: &[T]) -> Result<(), UsearchError> {
        self.check_dimensions(vector.len())?;
        let mut error: ffi::UsearchErrorT = ptr::null();
        unsafe {
            ffi::usearch_add(
                self.handle,
                key,
                vector.as_ptr().cast(),
                T::KIND.to_raw(),
                &mut error,
            );
        }
        check(error)
    }

    /// Stores `vector` under the next free key, which is the current
    /// size, and returns it.
    ///
    /// Reading the size and adding are two separate engine calls: a
    /// concurrent writer slipping between them produces a duplicate or
    /// skipped key. Use explicit keys when several writers share an
    /// index.
    pub fn push<T: VectorScalar>(&mut self, vector: &[T]) -> Result<u64, UsearchError> {
        let key = self.size()? as u64;
        self.add(key, vector)?;
        Ok(key)
    }

    /// Stores each `vectors[i]` under `keys[i]`, in order.
    ///
    /// Not transactional: a failure partway leaves the earlier adds in
    /// place.
    pub fn add_batch<T: VectorScalar>(
        &mut self,
        keys: &[u64],
        vectors: &[&[T]],
    ) -> Result<(), UsearchError> {
        if keys.len() != vectors.len() {
            return Err(UsearchError::BatchLengthMismatch {
                keys: keys.len(),
                vectors: vectors.len(),
            });
        }
        for (key, vector) in keys.iter().zip(vectors) {
            self.add(*key, vector)?;
        }
        Ok(())
    }

    /// Whether a vector is stored under `key`. A missing key is `false`,
    /// never an error; `Err` means the call itself failed.
    pub fn contains(&self, key: u64) -> Result<bool, UsearchError> {
        let mut error: ffi::UsearchErrorT = ptr::null();
        let found = unsafe { ffi::usearch_contains(self.handle, key, &mut error) };
        check(error)?;
        Ok(found)
    }

    /// Returns the vector stored under `key`, or `None` if absent.
    ///
    /// The element type may differ from the index quantization; the
    /// engine converts, subject to the narrower precision's rounding.
    /// The output buffer is sized to the live dimension count before the
    /// call.
    pub fn get<T: VectorScalar>(&self, key: u64) -> Result<Option<Vec<T>>, UsearchError> {
        let dimensions = self.dimensions()?;
        let mut vector = vec![T::default(); dimensions];
        let mut error: ffi::UsearchErrorT = ptr::null();
        let found = unsafe {
            ffi::usearch_get(
                self.handle,
                key,
                vector.as_mut_ptr().cast(),
                T::KIND.to_raw(),
                &mut error,
            )
        };
        check(error)?;
        Ok(found.then_some(vector))
    }

    /// Removes the vector stored under `key`.
    ///
    /// Engine builds without removal support refuse every call; the
    /// refusal surfaces as [`UsearchError::Unsupported`] carrying the
    /// engine's own text, and the vector stays in place.
    pub fn remove(&mut self, key: u64) -> Result<(), UsearchError> {
        let mut error: ffi::UsearchErrorT = ptr::null();
        unsafe { ffi::usearch_remove(self.handle, key, &mut error) };
        match check(error) {
            Err(UsearchError::Engine(msg)) => Err(UsearchError::Unsupported(msg)),
            other => other,
        }
    }

    /// Returns up to `limit` stored vectors closest to `query`, ordered
    /// by ascending distance.
    ///
    /// A `limit` of zero returns an empty result without consulting the
    /// engine; larger limits are clamped to the current size. The engine
    /// may return fewer than the effective limit when fewer candidates
    /// are reachable.
    pub fn search<T: VectorScalar>(
        &self,
        query: &[T],
        limit: usize,
    ) -> Result<Vec<Match>, UsearchError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        self.check_dimensions(query.len())?;
        let limit = limit.min(self.size()?);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut keys = vec![0u64; limit];
        let mut distances = vec![0.0f32; limit];
        let mut error: ffi::UsearchErrorT = ptr::null();
        let found = unsafe {
            ffi::usearch_search(
                self.handle,
                query.as_ptr().cast(),
                T::KIND.to_raw(),
                limit,
                keys.as_mut_ptr(),
                distances.as_mut_ptr(),
                &mut error,
            )
        };
        check(error)?;

        Ok(keys
            .into_iter()
            .zip(distances)
            .take(found)
            .map(|(key, distance)| Match { key, distance })
            .collect())
    }

    /// Searches exhaustively: every stored vector, closest first.
    pub fn search_all<T: VectorScalar>(&self, query: &[T]) -> Result<Vec<Match>, UsearchError> {
        let size = self.size()?;
        self.search(query, size)
    }

    /// Writes the index image to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), UsearchError> {
        let path = path.as_ref();
        let c = c_path(path)?;
        let mut error: ffi::UsearchErrorT = ptr::null();
        unsafe { ffi::usearch_save(self.handle, c.as_ptr(), &mut error) };
        check(error)?;
        debug!(path = %path.display(), "index saved");
        Ok(())
    }

    /// Replaces this index's contents with the image at `path`, copied
    /// into process memory.
    ///
    /// Fails if the image's recorded dimensionality disagrees with an
    /// index already configured for vectors.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), UsearchError> {
        let path = path.as_ref();
        let c = c_path(path)?;
        let mut error: ffi::UsearchErrorT = ptr::null();
        unsafe { ffi::usearch_load(self.handle, c.as_ptr(), &mut error) };
        check(error)?;
        self.path = Some(path.to_path_buf());
        debug!(path = %path.display(), "index loaded");
        Ok(())
    }

    /// Replaces this index's contents with a memory-mapped view of
    /// `path`. See [`from_view`](Self::from_view) for the lifetime
    /// contract.
    pub fn view(&mut self, path: impl AsRef<Path>) -> Result<(), UsearchError> {
        let path = path.as_ref();
        let c = c_path(path)?;
        let mut error: ffi::UsearchErrorT = ptr::null();
        unsafe { ffi::usearch_view(self.handle, c.as_ptr(), &mut error) };
        check(error)?;
        self.path = Some(path.to_path_buf());
        debug!(path = %path.display(), "index viewed");
        Ok(())
    }

    /// The file this index was loaded from or views, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn check_dimensions(&self, got: usize) -> Result<(), UsearchError> {
        let want = self.dimensions()?;
        if got != want {
            return Err(UsearchError::DimensionMismatch { got, want });
        }
        Ok(())
    }
}

impl Drop for Index {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            let mut error: ffi::UsearchErrorT = ptr::null();
            unsafe { ffi::usearch_free(self.handle, &mut error) };
            if !error.is_null() {
                let msg = unsafe { CStr::from_ptr(error) }.to_string_lossy();
                warn!("usearch_free: {msg}");
            }
            self.handle = ptr::null_mut();
        }
    }
}
