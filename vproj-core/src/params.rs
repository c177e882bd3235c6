/// Text format for frame parameter tables
///
/// One frame per line as six whitespace separated numbers `r1 r2 r3 tx ty tz`.
/// Blank lines and `#` comments are skipped.
use nom::{
    character::complete::{space0, space1},
    combinator::all_consuming,
    number::complete::double,
    sequence::{delimited, preceded, tuple},
    IResult,
};

use crate::error::ParamsError;
use crate::transform::FrameParams;

/// Parse a frame parameter table
pub fn parse_frame_params(input: &str) -> Result<Vec<FrameParams>, ParamsError> {
    let mut frames = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        if line.trim().is_empty() {
            continue;
        }

        match all_consuming(parse_frame_line)(line) {
            Ok((_, frame)) => frames.push(frame),
            Err(_) => {
                return Err(ParamsError::Malformed {
                    line: index + 1,
                    content: raw.trim().to_string(),
                })
            }
        }
    }

    if frames.is_empty() {
        return Err(ParamsError::Empty);
    }

    tracing::debug!(frames = frames.len(), "parsed frame parameters");
    Ok(frames)
}

/// Write frames in the format read by [`parse_frame_params`]
pub fn format_frame_params(frames: &[FrameParams]) -> String {
    let mut out = String::from("# r1 r2 r3 tx ty tz\n");
    for frame in frames {
        let row: Vec<String> = frame.to_array().iter().map(|v| format!("{v:?}")).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

fn parse_frame_line(input: &str) -> IResult<&str, FrameParams> {
    let (input, (r1, r2, r3, tx, ty, tz)) = delimited(
        space0,
        tuple((
            double,
            preceded(space1, double),
            preceded(space1, double),
            preceded(space1, double),
            preceded(space1, double),
            preceded(space1, double),
        )),
        space0,
    )(input)?;

    Ok((input, FrameParams::new(r1, r2, r3, tx, ty, tz)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "# header\n\n0 0 0 0 0 -4\n  0.5 1e-1 -2.5\t1 2 3  # trailing\n";
        let frames = parse_frame_params(text).unwrap();
        assert_eq!(
            frames,
            vec![
                FrameParams::new(0.0, 0.0, 0.0, 0.0, 0.0, -4.0),
                FrameParams::new(0.5, 0.1, -2.5, 1.0, 2.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_parse_reports_line_number() {
        let text = "0 0 0 0 0 0\n1 2 3 4 5\n";
        assert_eq!(
            parse_frame_params(text),
            Err(ParamsError::Malformed {
                line: 2,
                content: "1 2 3 4 5".to_string()
            })
        );

        let text = "0 0 0 0 0 0 7\n";
        assert!(matches!(
            parse_frame_params(text),
            Err(ParamsError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_empty_table() {
        assert_eq!(parse_frame_params("# nothing\n\n"), Err(ParamsError::Empty));
    }

    #[test]
    fn test_format_then_parse_keeps_values() {
        let frames = vec![
            FrameParams::new(0.1, 0.2, 0.3, -1.0, 2.5, -7.125),
            FrameParams::new(std::f64::consts::PI, 0.0, 0.0, 0.0, 0.0, -3.0),
        ];
        let text = format_frame_params(&frames);
        assert_eq!(parse_frame_params(&text).unwrap(), frames);
    }
}
