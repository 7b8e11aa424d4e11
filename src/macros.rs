/// Creates a [`Set`](crate::Set) holding the given values.
///
/// Duplicates collapse, as with [`Set::create`](crate::Set::create).
///
/// # Example
///
/// ```rust
/// use setkit::set;
///
/// let s = set![1, 2, 2, 3];
/// assert_eq!(s.len(), 3);
///
/// let empty: setkit::Set<u8> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Set::create([$($value),+])
    };
}
