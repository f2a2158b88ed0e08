//! Zero-Cost Safety Macros
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! The rule kernel performs eight neighbor reads per interior cell; the
//! border invariant guarantees every one of those indices is in range,
//! which is what makes the release-mode unchecked path sound.
//!
//! Usage:
//! ```rust
//! use wireworld_engine::fast;
//!
//! let idx = 2;
//!
//! let states = vec![6u8, 8, 7, 6, 6];
//! // Read: fast!(slice, [index])
//! let val = *fast!(states, [idx]);
//! assert_eq!(val, 7);
//!
//! let mut next = vec![0u8; 5];
//! // Write: fast!(slice, [index] = value)
//! fast!(next, [idx] = 8);
//! assert_eq!(next[idx], 8);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_fast_read() {
        let arr = vec![1, 2, 3, 4, 5];
        let val = *fast!(arr, [2]);
        assert_eq!(val, 3);
    }

    #[test]
    fn test_fast_write() {
        let mut arr = vec![1, 2, 3, 4, 5];
        fast!(arr, [2] = 100);
        assert_eq!(arr[2], 100);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_fast_bounds_check_debug() {
        let arr = vec![1, 2, 3];
        let _ = *fast!(arr, [10]); // Should panic in debug
    }
}
