use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid point '{0}'. Expected three comma-separated numbers 'X,Y,Z' (e.g., '1.0,-0.5,0').")]
    InvalidPointFormat(String),

    #[error("Component '{component}' of point '{point}' is not a number.")]
    InvalidComponent {
        component: &'static str,
        point: String,
    },
}

const AXES: [&str; 3] = ["x", "y", "z"];

/// Parses an `X,Y,Z` triple into a point. Whitespace around components is ignored.
pub fn parse_point(text: &str) -> Result<Point3<f64>, ParseError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidPointFormat(text.to_string()));
    }

    let mut coords = [0.0; 3];
    for ((coord, part), axis) in coords.iter_mut().zip(&parts).zip(AXES) {
        *coord = part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidComponent {
                component: axis,
                point: text.to_string(),
            })?;
    }
    Ok(Point3::from(coords))
}
