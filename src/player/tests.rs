use super::*;
use crate::config::PlayerSettings;
use std::io::Cursor;

const D: &str = "SONG_PART_DELIM";

fn settings(query: &str) -> PlayerSettings {
    PlayerSettings {
        query_command: query.to_string(),
        previous_command: "true".to_string(),
        next_command: "false".to_string(),
        ..PlayerSettings::default()
    }
}

#[test]
fn decode_record_reads_nul_padded_fields() {
    let text = "A title\x00SONG_PART_DELIMArtist\x00SONG_PART_DELIMAlbum\x00SONG_PART_DELIM222\x00SONG_PART_DELIM111";
    let r = decode_record(text, D).unwrap();
    assert_eq!(r.title, "A title");
    assert_eq!(r.artist, "Artist");
    assert_eq!(r.album, "Album");
    assert_eq!(r.duration_secs, 222.0);
    assert_eq!(r.position_secs, 111.0);
    assert_eq!(r.volume, None);
}

#[test]
fn decode_record_keeps_punctuation_inside_fields() {
    let text = format!("Hey, You! (Live)|x{D}Pink Floyd{D}The Wall: 2/2{D}285.5{D}12.25{D}80\n");
    let r = decode_record(&text, D).unwrap();
    assert_eq!(r.title, "Hey, You! (Live)|x");
    assert_eq!(r.album, "The Wall: 2/2");
    assert_eq!(r.duration_secs, 285.5);
    assert_eq!(r.position_secs, 12.25);
    assert_eq!(r.volume, Some(80.0));
}

#[test]
fn decode_record_ignores_extra_fields() {
    let text = format!("T{D}A{D}B{D}10{D}5{D}50{D}something{D}else");
    let r = decode_record(&text, D).unwrap();
    assert_eq!(r.volume, Some(50.0));
}

#[test]
fn decode_record_reports_missing_fields() {
    let text = format!("T{D}A{D}B{D}10");
    match decode_record(&text, D) {
        Err(QueryError::MalformedField { field, value }) => {
            assert_eq!(field, "position");
            assert!(value.is_empty());
        }
        other => panic!("unexpected: {other:?}"),
    }

    assert!(matches!(
        decode_record("", D),
        Err(QueryError::MalformedField { field: "artist", .. })
    ));
}

#[test]
fn decode_record_reports_unparsable_numbers() {
    let text = format!("T{D}A{D}B{D}ten{D}5");
    match decode_record(&text, D) {
        Err(QueryError::MalformedField { field, value }) => {
            assert_eq!(field, "duration");
            assert_eq!(value, "ten");
        }
        other => panic!("unexpected: {other:?}"),
    }

    let text = format!("T{D}A{D}B{D}10{D}NaN");
    assert!(matches!(
        decode_record(&text, D),
        Err(QueryError::MalformedField { field: "position", .. })
    ));

    let text = format!("T{D}A{D}B{D}10{D}5{D}loud");
    assert!(matches!(
        decode_record(&text, D),
        Err(QueryError::MalformedField { field: "volume", .. })
    ));
}

#[test]
fn capture_bounded_flags_only_real_overflow() {
    let c = capture_bounded(Cursor::new(b"12345".to_vec()), 5).unwrap();
    assert_eq!(c.bytes, b"12345");
    assert!(!c.truncated);

    let c = capture_bounded(Cursor::new(b"123456789".to_vec()), 5).unwrap();
    assert_eq!(c.bytes, b"12345");
    assert!(c.truncated);

    let c = capture_bounded(Cursor::new(Vec::new()), 5).unwrap();
    assert!(c.bytes.is_empty());
    assert!(!c.truncated);
}

#[test]
fn capture_bounded_accepts_the_largest_limit() {
    let c = capture_bounded(Cursor::new(b"whole output".to_vec()), usize::MAX).unwrap();
    assert_eq!(c.bytes, b"whole output");
    assert!(!c.truncated);
}

#[test]
fn fetch_decodes_command_output() {
    let client = PlayerClient::new(settings(&format!(
        "echo 'Song{D}Artist{D}Album{D}222{D}111{D}75'"
    )));
    let r = client.fetch().unwrap();
    assert_eq!(r.title, "Song");
    assert_eq!(r.artist, "Artist");
    assert_eq!(r.album, "Album");
    assert_eq!(r.duration_secs, 222.0);
    assert_eq!(r.position_secs, 111.0);
    assert_eq!(r.volume, Some(75.0));
}

#[test]
fn fetch_reports_spawn_failure() {
    let mut s = settings("echo hi");
    s.shell = "/nonexistent/itti-test-shell".to_string();
    let client = PlayerClient::new(s);
    assert!(matches!(
        client.fetch(),
        Err(QueryError::ProcessFailure { .. })
    ));
}

#[test]
fn fetch_reports_unsuccessful_exit() {
    let client = PlayerClient::new(settings(&format!(
        "echo 'Song{D}Artist{D}Album{D}222{D}111'; exit 3"
    )));
    match client.fetch() {
        Err(QueryError::ProcessFailure { command, source }) => {
            assert!(command.contains("exit 3"));
            assert!(source.to_string().contains("exit"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn fetch_reports_malformed_output() {
    let client = PlayerClient::new(settings("echo 'nothing useful'"));
    assert!(matches!(
        client.fetch(),
        Err(QueryError::MalformedField { field: "artist", .. })
    ));
}

#[test]
fn fetch_accepts_truncated_output_that_still_decodes() {
    let kept = format!("Song{D}Artist{D}Album{D}222{D}111{D}0.7");
    let mut s = settings(&format!("printf '%s' '{kept}5'"));
    s.capture_limit = kept.len();
    let r = PlayerClient::new(s).fetch().unwrap();
    assert_eq!(r.position_secs, 111.0);
    assert_eq!(r.volume, Some(0.7));
}

#[test]
fn fetch_reports_truncation_when_record_is_cut_short() {
    let mut s = settings(&format!("printf '%s' 'Song{D}Artist{D}Album{D}222{D}111'"));
    s.capture_limit = 10;
    assert!(matches!(
        PlayerClient::new(s).fetch(),
        Err(QueryError::TruncatedOutput { limit: 10 })
    ));
}

#[test]
fn fetch_stops_reading_endless_output() {
    let mut s = settings(&format!("yes '{D}'"));
    s.capture_limit = 100;
    assert!(matches!(
        PlayerClient::new(s).fetch(),
        Err(QueryError::TruncatedOutput { limit: 100 })
    ));
}

#[test]
fn send_runs_matching_transport_command() {
    let client = PlayerClient::new(settings("true"));
    assert!(client.send(TransportCmd::Previous).is_ok());

    let err = client.send(TransportCmd::Next).unwrap_err();
    assert_eq!(err.cmd, TransportCmd::Next);
    assert_eq!(err.command, "false");
}

#[test]
fn send_reports_spawn_failure() {
    let mut s = settings("true");
    s.shell = "/nonexistent/itti-test-shell".to_string();
    let err = PlayerClient::new(s)
        .send(TransportCmd::Previous)
        .unwrap_err();
    assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
}
