/// Evaluates `$assert` and, when it does not hold, logs the numeric error code
/// and evaluates to `Err($err)`. Meant to be used with `?`.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {{
        if $assert {
            Ok(())
        } else {
            let error_code = $err;
            soroban_sdk::log!($env, "Error thrown at line", error_code as u32, line!());
            Err(error_code)
        }
    }};
    ($env:expr, $assert:expr, $err:expr, $msg:literal $(, $arg:expr)* $(,)?) => {{
        if $assert {
            Ok(())
        } else {
            let error_code = $err;
            soroban_sdk::log!($env, "Error thrown at line", error_code as u32, line!());
            soroban_sdk::log!($env, $msg $(, $arg)*);
            Err(error_code)
        }
    }};
}
