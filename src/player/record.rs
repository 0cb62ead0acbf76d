use super::types::QueryError;

/// One snapshot of player metadata, produced by a single query.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration_secs: f64,
    pub position_secs: f64,
    pub volume: Option<f64>,
}

/// Decode one record from the query's output.
///
/// Fields are split on `delimiter`; only the first five (plus an optional
/// sixth, the volume) are read and any further fields are ignored. Stray NUL
/// bytes and line breaks around each field are dropped.
pub fn decode_record(text: &str, delimiter: &str) -> Result<TrackRecord, QueryError> {
    let fields: Vec<&str> = text.split(delimiter).map(clean_field).collect();

    let title = required(&fields, 0, "title")?;
    let artist = required(&fields, 1, "artist")?;
    let album = required(&fields, 2, "album")?;
    let duration_secs = parse_seconds(required(&fields, 3, "duration")?, "duration")?;
    let position_secs = parse_seconds(required(&fields, 4, "position")?, "position")?;
    let volume = match fields.get(5).map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Some(parse_seconds(v, "volume")?),
        _ => None,
    };

    Ok(TrackRecord {
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        duration_secs,
        position_secs,
        volume,
    })
}

fn clean_field(field: &str) -> &str {
    field.trim_matches(|c: char| c == '\0' || c == '\r' || c == '\n')
}

fn required<'a>(
    fields: &[&'a str],
    index: usize,
    name: &'static str,
) -> Result<&'a str, QueryError> {
    fields
        .get(index)
        .copied()
        .ok_or(QueryError::MalformedField {
            field: name,
            value: String::new(),
        })
}

fn parse_seconds(value: &str, name: &'static str) -> Result<f64, QueryError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| QueryError::MalformedField {
            field: name,
            value: value.to_string(),
        })
}
