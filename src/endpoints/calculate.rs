//! # Endpoints Numéricos
//!
//! - /calculate-next: siguiente entero
//! - /calculate-area: área de un triángulo con división real
//!
//! Los enteros no tienen límite de tamaño; solo el área pasa a `f64`.

use super::{leading_param, Call, EndpointContext};
use crate::http::{Fixed, Reply, Response};
use num_bigint::BigInt;
use std::str::FromStr;

/// Handler para /calculate-next?num=N
///
/// Responde `N+1` en decimal. Entradas no enteras son 400.
pub fn next_handler(_ctx: &EndpointContext, call: Call<'_>) -> Reply {
    let Some(num) = leading_param(call.params, "num=") else {
        return Fixed::BadRequest.into();
    };

    match parse_int(&num) {
        Some(n) => text((n + 1u32).to_string()),
        None => Fixed::BadRequest.into(),
    }
}

/// Handler para /calculate-area?height=H&width=W
///
/// Responde `H*W/2` como número real (`6.0`, `7.5`, `5e+16`).
pub fn area_handler(_ctx: &EndpointContext, call: Call<'_>) -> Reply {
    match triangle_area(call.params) {
        Some(area) => text(format_real(area)),
        None => Fixed::BadRequest.into(),
    }
}

fn triangle_area(params: &str) -> Option<f64> {
    let height = parse_int(&leading_param(params, "height=")?)?;

    // El segundo parámetro tiene que ser width, en ese orden
    let (_, rest) = params.split_once('&')?;
    let width = parse_int(&leading_param(rest, "width=")?)?;

    // Producto exacto; el redondeo a f64 ocurre una sola vez
    let product: f64 = (height * width).to_string().parse().ok()?;
    let area = product / 2.0;
    area.is_finite().then_some(area)
}

/// Entero con signo de cualquier tamaño, tolerando espacios alrededor
fn parse_int(value: &str) -> Option<BigInt> {
    BigInt::from_str(value.trim()).ok()
}

/// Formato de número real con la convención de `repr` de Python
///
/// Los valores enteros llevan `.0`; desde `1e16` (o bajo `1e-4`) se usa
/// notación exponencial con signo y al menos dos dígitos de exponente.
///
/// ```
/// use rootweb::endpoints::calculate::format_real;
///
/// assert_eq!(format_real(6.0), "6.0");
/// assert_eq!(format_real(7.5), "7.5");
/// assert_eq!(format_real(5e16), "5e+16");
/// ```
pub fn format_real(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponential(value);
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// `5e16` → `5e+16`, `1.5e-5` → `1.5e-05`
fn exponential(value: f64) -> String {
    let shortest = format!("{:e}", value);
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return shortest;
    };

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

fn text(body: String) -> Reply {
    Response::ok("text/plain", body.into_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use crate::storage::DiskStore;
    use std::sync::Arc;

    fn ctx() -> EndpointContext {
        EndpointContext {
            upload_root: "uploads".into(),
            store: Arc::new(DiskStore),
        }
    }

    fn call(params: &str) -> Call<'_> {
        Call { params, body: b"" }
    }

    fn body_of(reply: Reply) -> String {
        match reply {
            Reply::Built(response) => String::from_utf8(response.body().to_vec()).unwrap(),
            Reply::Fixed(fixed) => panic!("expected 200, got {:?}", fixed),
        }
    }

    #[test]
    fn test_next_positive() {
        assert_eq!(body_of(next_handler(&ctx(), call("num=41"))), "42");
    }

    #[test]
    fn test_next_negative_and_zero() {
        assert_eq!(body_of(next_handler(&ctx(), call("num=-1"))), "0");
        assert_eq!(body_of(next_handler(&ctx(), call("num=0"))), "1");
        assert_eq!(body_of(next_handler(&ctx(), call("num=-10"))), "-9");
    }

    #[test]
    fn test_next_content_type() {
        match next_handler(&ctx(), call("num=1")) {
            Reply::Built(response) => {
                assert_eq!(response.status(), StatusCode::Ok);
                assert_eq!(response.header("Content-Type"), Some("text/plain"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_next_rejects_non_integers() {
        for params in ["num=abc", "num=1.5", "num=", "num=1e3", "value=3", "", "x=1&num=2"] {
            assert_eq!(
                next_handler(&ctx(), call(params)),
                Reply::Fixed(Fixed::BadRequest),
                "params: {}",
                params
            );
        }
    }

    #[test]
    fn test_next_beyond_64_bits() {
        let params = format!("num={}", i64::MAX);
        assert_eq!(body_of(next_handler(&ctx(), call(&params))), "9223372036854775808");

        assert_eq!(
            body_of(next_handler(&ctx(), call("num=99999999999999999999"))),
            "100000000000000000000"
        );
        assert_eq!(
            body_of(next_handler(&ctx(), call("num=-9223372036854775809"))),
            "-9223372036854775808"
        );
    }

    #[test]
    fn test_next_accepts_sign_and_spaces() {
        assert_eq!(body_of(next_handler(&ctx(), call("num=+7"))), "8");
        assert_eq!(body_of(next_handler(&ctx(), call("num=%207%20"))), "8");
        assert_eq!(body_of(next_handler(&ctx(), call("num=-0"))), "1");
    }

    #[test]
    fn test_area_real_division() {
        assert_eq!(body_of(area_handler(&ctx(), call("height=3&width=4"))), "6.0");
        assert_eq!(body_of(area_handler(&ctx(), call("height=3&width=5"))), "7.5");
        assert_eq!(body_of(area_handler(&ctx(), call("height=0&width=9"))), "0.0");
        assert_eq!(body_of(area_handler(&ctx(), call("height=-2&width=3"))), "-3.0");
    }

    #[test]
    fn test_area_large_operands() {
        assert_eq!(
            body_of(area_handler(&ctx(), call("height=100000000&width=1000000000"))),
            "5e+16"
        );
        // Operandos fuera de i64, resultado exacto
        assert_eq!(
            body_of(area_handler(&ctx(), call("height=10000000000000000000&width=1"))),
            "5e+18"
        );
    }

    #[test]
    fn test_area_beyond_f64_is_bad_request() {
        let params = format!("height=1{}&width=1{}", "0".repeat(200), "0".repeat(200));
        assert_eq!(area_handler(&ctx(), call(&params)), Reply::Fixed(Fixed::BadRequest));
    }

    #[test]
    fn test_area_rejects_bad_input() {
        for params in [
            "height=3",
            "height=3&",
            "width=4&height=3",
            "height=3&depth=4",
            "height=a&width=4",
            "height=3&width=4.5",
            "",
        ] {
            assert_eq!(
                area_handler(&ctx(), call(params)),
                Reply::Fixed(Fixed::BadRequest),
                "params: {}",
                params
            );
        }
    }

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(6.0), "6.0");
        assert_eq!(format_real(0.5), "0.5");
        assert_eq!(format_real(-3.0), "-3.0");
        assert_eq!(format_real(1234567.0), "1234567.0");
        assert_eq!(format_real(9999999999999998.0), "9999999999999998.0");
    }

    #[test]
    fn test_format_real_exponential() {
        assert_eq!(format_real(1e16), "1e+16");
        assert_eq!(format_real(1.5e16), "1.5e+16");
        assert_eq!(format_real(-5e16), "-5e+16");
        assert_eq!(format_real(2.5e-5), "2.5e-05");
        assert_eq!(format_real(1e300), "1e+300");
    }
}
