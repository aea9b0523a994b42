use super::{decode, encode, inverse, transform, Stat};
use libc::size_t;
use std::ptr;
use std::slice;

// C FFI forwarders
/// Transform a buffer into a buffer.
/// No pointers may be NULL at this point.
///
/// Returns a pointer to a Stat structure if successful; otherwise
/// returns NULL.
///
/// # Safety
/// If your input sizes are bad, expect me to run out of bounds.
#[no_mangle]
pub unsafe extern "C" fn bwz_transform(
    source: *const u8,
    nsource: size_t,
    target: *mut u8,
    ntarget: size_t,
) -> *const Stat {
    if source.is_null() || target.is_null() {
        ptr::null()
    } else {
        let result = transform(
            &mut slice::from_raw_parts(source, nsource),
            &mut slice::from_raw_parts_mut(target, ntarget),
        );
        match result {
            Ok(r) => Box::into_raw(Box::new(r)),
            Err(_) => ptr::null(),
        }
    }
}

/// Invert a transformed buffer into a buffer.
/// No pointers may be NULL at this point.
///
/// Returns a pointer to a Stat structure if successful; otherwise
/// returns NULL.
///
/// # Safety
/// If your input sizes are bad, expect me to run out of bounds.
#[no_mangle]
pub unsafe extern "C" fn bwz_inverse(
    source: *const u8,
    nsource: size_t,
    target: *mut u8,
    ntarget: size_t,
) -> *const Stat {
    if source.is_null() || target.is_null() {
        ptr::null()
    } else {
        let result = inverse(
            &mut slice::from_raw_parts(source, nsource),
            &mut slice::from_raw_parts_mut(target, ntarget),
        );
        match result {
            Ok(r) => Box::into_raw(Box::new(r)),
            Err(_) => ptr::null(),
        }
    }
}

/// Move-to-front encode a buffer into a buffer.
/// No pointers may be NULL at this point.
///
/// Returns a pointer to a Stat structure if successful; otherwise
/// returns NULL.
///
/// # Safety
/// If your input sizes are bad, expect me to run out of bounds.
#[no_mangle]
pub unsafe extern "C" fn bwz_encode(
    source: *const u8,
    nsource: size_t,
    target: *mut u8,
    ntarget: size_t,
) -> *const Stat {
    if source.is_null() || target.is_null() {
        ptr::null()
    } else {
        let result = encode(
            &mut slice::from_raw_parts(source, nsource),
            &mut slice::from_raw_parts_mut(target, ntarget),
        );
        match result {
            Ok(r) => Box::into_raw(Box::new(r)),
            Err(_) => ptr::null(),
        }
    }
}

/// Move-to-front decode a buffer into a buffer.
/// No pointers may be NULL at this point.
///
/// Returns a pointer to a Stat structure if successful; otherwise
/// returns NULL.
///
/// # Safety
/// If your input sizes are bad, expect me to run out of bounds.
#[no_mangle]
pub unsafe extern "C" fn bwz_decode(
    source: *const u8,
    nsource: size_t,
    target: *mut u8,
    ntarget: size_t,
) -> *const Stat {
    if source.is_null() || target.is_null() {
        ptr::null()
    } else {
        let result = decode(
            &mut slice::from_raw_parts(source, nsource),
            &mut slice::from_raw_parts_mut(target, ntarget),
        );
        match result {
            Ok(r) => Box::into_raw(Box::new(r)),
            Err(_) => ptr::null(),
        }
    }
}

/// Let the rust system take the pointer back.
///
/// # Safety
/// Actually fine.
#[no_mangle]
pub unsafe extern "C" fn bwz_free_stat(ptr: *mut Stat) {
    drop(Box::from_raw(ptr));
}
