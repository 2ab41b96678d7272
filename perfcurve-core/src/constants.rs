/// Inputs shorter than this are sorted on the calling thread even with the
/// `parallel` feature enabled. Below it the rayon fork/join overhead is larger
/// than the sort itself.
pub const PARALLEL_SORT_MIN_LEN: usize = 1 << 16;
