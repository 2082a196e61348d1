//! Nominatim client tests against a local one-shot HTTP stub.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use waypoint_router::Error;
use waypoint_router::geocode::{GeocodeConfig, NominatimClient};
use waypoint_router::planner::RoutePlanner;
use waypoint_router::traits::{Coord, Geocoder};

/// Serves exactly one response with the given status and JSON body, and
/// hands back the request head it received.
fn stub_server(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut head = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush");
        let _ = tx.send(head);
    });

    (base_url, rx)
}

fn client_for(base_url: String) -> NominatimClient {
    NominatimClient::new(GeocodeConfig {
        base_url,
        user_agent: "waypoint-router-tests".to_string(),
        timeout_secs: 5,
        limit: 1,
        use_system_proxy: false,
    })
    .expect("build client")
}

#[test]
fn locate_returns_first_match() {
    let (base_url, requests) = stub_server(
        "200 OK",
        r#"[{"place_id":1,"lat":"26.9239","lon":"75.8267","display_name":"Hawa Mahal"},{"lat":"0","lon":"0"}]"#,
    );
    let client = client_for(base_url);

    let coord = client.locate("Hawa Mahal").unwrap();
    assert_eq!(coord, Some(Coord::new(26.9239, 75.8267)));

    let head = requests.recv().unwrap();
    let request_line = head.lines().next().unwrap_or_default();
    assert!(request_line.starts_with("GET /search?"), "got {}", request_line);
    assert!(request_line.contains("format=json"));
    assert!(request_line.contains("q=Hawa+Mahal"));
    assert!(request_line.contains("limit=1"));
    assert!(head.to_ascii_lowercase().contains("user-agent: waypoint-router-tests"));
}

#[test]
fn locate_without_match_is_none() {
    let (base_url, _requests) = stub_server("200 OK", "[]");
    let client = client_for(base_url);

    assert_eq!(client.locate("Atlantis").unwrap(), None);
}

#[test]
fn server_error_is_reported() {
    let (base_url, _requests) = stub_server("503 Service Unavailable", "[]");
    let client = client_for(base_url);

    assert!(matches!(client.locate("Hawa Mahal"), Err(Error::Geocode(_))));
}

#[test]
fn search_adds_waypoint_through_planner() {
    let (base_url, _requests) = stub_server("200 OK", r#"[{"lat":"26.9855","lon":"75.8513"}]"#);
    let client = client_for(base_url);
    let mut planner: RoutePlanner = RoutePlanner::default();

    let id = planner.add_from_search(&client, "Amber Fort").unwrap();
    assert_eq!(planner.store().position(id), Some(0));
    assert_eq!(planner.store().snapshot(), vec![Coord::new(26.9855, 75.8513)]);
}

#[test]
fn search_without_match_adds_nothing() {
    let (base_url, _requests) = stub_server("200 OK", "[]");
    let client = client_for(base_url);
    let mut planner: RoutePlanner = RoutePlanner::default();

    assert!(matches!(
        planner.add_from_search(&client, "Atlantis"),
        Err(Error::LocationNotFound(query)) if query == "Atlantis"
    ));
    assert!(planner.store().is_empty());
    assert!(!planner.store().can_undo());
}
