/// Bounds-check-free slice views for the hot transform loops.
pub trait UncheckedSliceExt<T> {
    unsafe fn nocheck(&self) -> unchecked_index::UncheckedIndex<&Self>;
    unsafe fn nocheck_mut(&mut self) -> unchecked_index::UncheckedIndex<&mut Self>;
}

impl<T> UncheckedSliceExt<T> for [T] {
    unsafe fn nocheck(&self) -> unchecked_index::UncheckedIndex<&Self> {
        unchecked_index::unchecked_index(self)
    }

    unsafe fn nocheck_mut(&mut self) -> unchecked_index::UncheckedIndex<&mut Self> {
        unchecked_index::unchecked_index(self)
    }
}
