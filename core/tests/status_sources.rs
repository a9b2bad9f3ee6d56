//! End-to-end tests that drive real subprocesses.
//!
//! `sh -c` scripts stand in for `netstat`, `lsof` and `tasklist` so the
//! command plumbing is exercised on any Unix host.
#![cfg(unix)]

use portwatch_core::{
    CommandSpec, Error, LsofSource, NetstatSource, PortRecord, ProcessNameResolver,
    StatusSourcePort, TasklistResolver,
};
use tokio_test::{assert_err, assert_ok};

/// Mimics `tasklist /FI "PID eq <pid>"`: `$2` is the filter expression.
const TASKLIST_SCRIPT: &str = r#"pid=${2##* }
printf 'Image Name                     PID Session Name        Session#    Mem Usage\n'
printf '========================= ======== ================ =========== ============\n'
printf '\n'
printf 'proc%s.exe                 %s Console                    1     3,000 K\n' "$pid" "$pid"
"#;

/// A command that prints `output` verbatim.
fn printing(output: &str) -> CommandSpec {
    CommandSpec::new("sh", ["-c", "printf '%s' \"$1\"", "sh", output])
}

/// A command that exits with `code` after writing to stderr.
fn failing(code: u8) -> CommandSpec {
    CommandSpec::new(
        "sh",
        ["-c".to_string(), format!("echo boom >&2; exit {}", code)],
    )
}

fn tasklist() -> TasklistResolver {
    TasklistResolver::with_command(CommandSpec::new("sh", ["-c", TASKLIST_SCRIPT, "tasklist"]))
}

fn netstat(output: &str) -> NetstatSource<TasklistResolver> {
    NetstatSource::with_parts(printing(output), tasklist())
}

#[tokio::test]
async fn test_netstat_tcp() {
    let source = netstat("TCP    127.0.0.1:80       0.0.0.0:0       LISTENING       1234\n");

    let records = assert_ok!(source.fetch().await);
    assert_eq!(
        records,
        vec![PortRecord::new(
            "TCP",
            "127.0.0.1:80",
            "0.0.0.0:0",
            "LISTENING",
            "1234",
            "proc1234.exe"
        )]
    );
}

#[tokio::test]
async fn test_netstat_udp() {
    let source = netstat("UDP    127.0.0.1:53       *:*             5678\n");

    let records = assert_ok!(source.fetch().await);
    assert_eq!(
        records,
        vec![PortRecord::new(
            "UDP",
            "127.0.0.1:53",
            "*",
            "N/A",
            "5678",
            "proc5678.exe"
        )]
    );
}

#[tokio::test]
async fn test_netstat_tcp_and_udp_in_order() {
    let source = netstat(
        "TCP    127.0.0.1:80       0.0.0.0:0       LISTENING       1234\n\
         UDP    127.0.0.1:53       *:*             5678\n",
    );

    let records = assert_ok!(source.fetch().await);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].pid, "1234");
    assert_eq!(records[0].process_name, "proc1234.exe");
    assert_eq!(records[1].pid, "5678");
    assert_eq!(records[1].process_name, "proc5678.exe");
}

#[tokio::test]
async fn test_netstat_command_failure() {
    let source = NetstatSource::with_parts(failing(3), tasklist());

    let err = assert_err!(source.fetch().await);
    match err {
        Error::CommandFailed(message) => assert!(message.contains("boom")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_netstat_spawn_failure() {
    let source = NetstatSource::with_parts(
        CommandSpec::new("portwatch-no-such-netstat", ["-ano"]),
        tasklist(),
    );

    assert!(matches!(source.fetch().await, Err(Error::CommandFailed(_))));
}

#[tokio::test]
async fn test_netstat_with_failing_resolver_keeps_record() {
    let source = NetstatSource::with_parts(
        printing("TCP 0.0.0.0:445 0.0.0.0:0 LISTENING 4\n"),
        TasklistResolver::with_command(failing(1)),
    );

    let records = assert_ok!(source.fetch().await);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].pid, "4");
    assert_eq!(records[0].process_name, "Unknown");
}

#[tokio::test]
async fn test_resolver_success() {
    assert_eq!(tasklist().resolve("42").await, "proc42.exe");
}

#[tokio::test]
async fn test_resolver_short_output_is_unknown() {
    let resolver = TasklistResolver::with_command(printing("Image Name\n=====\n"));
    assert_eq!(resolver.resolve("42").await, "Unknown");
}

#[tokio::test]
async fn test_resolver_non_zero_exit_is_unknown() {
    let resolver = TasklistResolver::with_command(failing(1));
    assert_eq!(resolver.resolve("42").await, "Unknown");
}

#[tokio::test]
async fn test_lsof_source() {
    let source = LsofSource::with_command(printing(
        "COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME\n\
         node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)\n\
         curl      4242  code    5u  IPv4 0x1234567890abcdef      0t0  TCP 10.0.0.2:50544->93.184.216.34:443 (ESTABLISHED)\n",
    ));

    let records = assert_ok!(source.fetch().await);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].process_name, "node");
    assert_eq!(records[0].state, "LISTEN");
    assert_eq!(records[0].remote_address, "*");
    assert_eq!(
        records[1],
        PortRecord::new(
            "TCP",
            "10.0.0.2:50544",
            "93.184.216.34:443",
            "ESTABLISHED",
            "4242",
            "curl"
        )
    );
}

#[tokio::test]
async fn test_lsof_command_failure() {
    let source = LsofSource::with_command(failing(1));
    assert!(matches!(source.fetch().await, Err(Error::CommandFailed(_))));
}
