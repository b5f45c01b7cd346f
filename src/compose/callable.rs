/// A unary, fallible function object.
///
/// Closures and function items of shape `Fn(T) -> Result<T, E>` are
/// callables already; implement it by hand for named function objects.
///
/// ```rust
/// use seqtools::Callable;
///
/// struct MultiplyBy(i64);
///
/// impl Callable<i64, String> for MultiplyBy {
///     fn call(&self, input: i64) -> Result<i64, String> {
///         input.checked_mul(self.0).ok_or_else(|| "overflow".to_string())
///     }
/// }
///
/// assert_eq!(MultiplyBy(3).call(4), Ok(12));
/// assert_eq!((|x: i64| Ok::<_, String>(x + 1)).call(4), Ok(5));
/// ```
pub trait Callable<T, E> {
    fn call(&self, input: T) -> Result<T, E>;
}

impl<T, E, F> Callable<T, E> for F
where
    F: Fn(T) -> Result<T, E>,
{
    fn call(&self, input: T) -> Result<T, E> {
        self(input)
    }
}
