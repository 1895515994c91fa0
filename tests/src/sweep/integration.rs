#![cfg(test)]
use std::sync::Arc;

use pretty_assertions::assert_eq;
use sweepr_common::CodecError;
use sweepr_common::network::cidr::cidr_to_range;
use sweepr_core::{LineReporter, ProbeError, ProbeResult, SweepError, SweepSummary, sweep};

use crate::util::ScriptedProbe;

async fn report(start: &str, end: &str, probe: Arc<ScriptedProbe>) -> String {
    let mut reporter = LineReporter::new(Vec::new());
    sweep(start, end, probe, &mut reporter)
        .await
        .expect("sweep should succeed");
    String::from_utf8(reporter.into_inner()).expect("report is utf-8")
}

/// One reachable address with a latency, then one that times out.
#[tokio::test]
async fn two_addresses_up_then_timeout() {
    let probe = Arc::new(
        ScriptedProbe::new()
            .up("10.0.0.1", "0.5")
            .fail("10.0.0.2", ProbeError::Timeout),
    );

    let text = report("10.0.0.1", "10.0.0.2", probe.clone()).await;

    assert_eq!(
        text,
        "Starting ping scan from 10.0.0.1 to 10.0.0.2...\n\
         [UP]   10.0.0.1 - 0.5 ms\n\
         [DOWN] 10.0.0.2 - timeout\n"
    );
    assert_eq!(probe.calls(), ["10.0.0.1", "10.0.0.2"]);
}

#[tokio::test]
async fn swapped_endpoints_report_identically() {
    let script = || {
        Arc::new(
            ScriptedProbe::new()
                .up("192.168.7.1", "3.21")
                .silent_up("192.168.7.2")
                .fail("192.168.7.3", ProbeError::Failed("permission denied".into())),
        )
    };

    let forward = report("192.168.7.0", "192.168.7.4", script()).await;
    let backward = report("192.168.7.4", "192.168.7.0", script()).await;

    assert_eq!(forward, backward);
    assert_eq!(
        forward,
        "Starting ping scan from 192.168.7.0 to 192.168.7.4...\n\
         [DOWN] 192.168.7.0 - unreachable\n\
         [UP]   192.168.7.1 - 3.21 ms\n\
         [UP]   192.168.7.2 - reply received\n\
         [ERROR] 192.168.7.3 - permission denied\n\
         [DOWN] 192.168.7.4 - unreachable\n"
    );
}

#[tokio::test]
async fn cidr_block_is_swept_end_to_end() {
    let (start, end) = cidr_to_range("172.16.4.77/29").unwrap();
    assert_eq!((start.as_str(), end.as_str()), ("172.16.4.72", "172.16.4.79"));

    let probe = Arc::new(ScriptedProbe::new().up("172.16.4.77", "0.081"));
    let mut results: Vec<(String, ProbeResult)> = Vec::new();

    let summary = sweep(&start, &end, probe.clone(), &mut results).await.unwrap();

    assert_eq!(summary, SweepSummary { up: 1, down: 7, errors: 0 });
    assert_eq!(results.len(), 8);
    assert_eq!(results[0].0, "172.16.4.72");
    assert_eq!(results[7].0, "172.16.4.79");
    assert!(results[5].1.is_up());
    assert_eq!(probe.calls().len(), 8);
}

#[tokio::test]
async fn single_host_block() {
    let (start, end) = cidr_to_range("10.0.0.0/32").unwrap();
    let text = report(&start, &end, Arc::new(ScriptedProbe::new().silent_up("10.0.0.0"))).await;

    assert_eq!(
        text,
        "Starting ping scan from 10.0.0.0 to 10.0.0.0...\n[UP]   10.0.0.0 - reply received\n"
    );
}

#[tokio::test]
async fn malformed_input_never_reaches_the_probe() {
    assert!(matches!(
        cidr_to_range("not-a-cidr"),
        Err(CodecError::InvalidCidrFormat { .. })
    ));

    let probe = Arc::new(ScriptedProbe::new());
    let mut results: Vec<(String, ProbeResult)> = Vec::new();
    let err = sweep("10.0.0.1", "10.0.0", probe.clone(), &mut results)
        .await
        .unwrap_err();

    assert!(matches!(err, SweepError::Codec(CodecError::InvalidAddressFormat { .. })));
    assert!(probe.calls().is_empty());
    assert!(results.is_empty());
}
