/// Unwraps an `Ok` value, or evaluates `$block` with the error bound to `$err`.
/// The block is expected to diverge (`return`, `continue`) or yield a fallback.
#[macro_export]
macro_rules! ok_or {
    ($result: expr, $err: pat => $block: expr) => {
        match $result {
            Ok(val) => val,
            Err($err) => $block,
        }
    };
}
