//! Range command implementation

use anyhow::{Context, Result};
use cardstack::ranges::{RangeSpec, range};

use crate::utils::range_spec;

pub fn run(size: Option<u64>, start: Option<i64>, end: Option<i64>) -> Result<()> {
    let spec = range_spec(size, start, end)?;
    println!("{}", render(spec)?);
    Ok(())
}

fn render(spec: RangeSpec) -> Result<String> {
    let values = range(spec).with_context(|| format!("Failed to generate range {spec:?}"))?;
    log::info!("generated {} values", values.len());
    Ok(serde_json::to_string(&values)?)
}

#[cfg(test)]
mod tests {
    use cardstack::common::{Error, ErrorKind, RangeErrorKind};

    use super::*;

    #[test]
    fn test_render_size() {
        assert_eq!(render(RangeSpec::Size(4)).unwrap(), "[0,1,2,3]");
        assert_eq!(render(RangeSpec::Size(0)).unwrap(), "[]");
    }

    #[test]
    fn test_render_bounds() {
        assert_eq!(render(RangeSpec::bounds(-2, 1)).unwrap(), "[-2,-1,0]");
    }

    #[test]
    fn test_render_rejects_equal_bounds() {
        let err = render(RangeSpec::bounds(3, 3)).unwrap_err();
        let source = err.downcast_ref::<Error>().unwrap();
        assert!(matches!(
            source.kind(),
            ErrorKind::InvalidRange {
                kind: RangeErrorKind::StartEqualsEnd,
                ..
            }
        ));
    }
}
