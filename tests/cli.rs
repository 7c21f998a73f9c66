use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run_with_input(input: &str) -> Output {
    let mut file = NamedTempFile::new().expect("create input file");
    file.write_all(input.as_bytes()).expect("write input file");
    Command::new(env!("CARGO_BIN_EXE_classic-scheduler"))
        .arg(file.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("run classic-scheduler")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn fcfs_report() {
    let output = run_with_input(
        "processcount 2\n\
         use fcfs\n\
         process name A arrival 0 burst 5\n\
         process name B arrival 1 burst 3\n\
         end\n",
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "2 processes\n\
         Using FCFS\n\
         PA wait 0 turnaround 5 response 0\n\
         PB wait 4 turnaround 7 response 4\n\
         \n\
         Average Turnaround Time: 6.0\n\
         Average Waiting Time: 2.0\n\
         Average Response Time: 2.0\n"
    );
}

#[test]
fn round_robin_report() {
    let output = run_with_input(
        "processcount 2\n\
         quantum 2\n\
         use rr\n\
         process name A arrival 0 burst 4\n\
         process name B arrival 1 burst 3\n\
         end\n",
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "2 processes\n\
         Using RR\n\
         PA wait 2 turnaround 6 response 0\n\
         PB wait 3 turnaround 6 response 1\n\
         \n\
         Average Turnaround Time: 6.0\n\
         Average Waiting Time: 2.5\n\
         Average Response Time: 0.5\n"
    );
}

#[test]
fn sjf_lists_processes_in_execution_order() {
    let output = run_with_input(
        "processcount 3\n\
         use sjf\n\
         process name 1 arrival 0 burst 6\n\
         process burst 2 name 2 arrival 0\n\
         process name 3 arrival 1 burst 1\n",
    );

    assert!(output.status.success());
    let lines: Vec<String> = stdout(&output).lines().map(str::to_owned).collect();
    assert_eq!(lines[1], "Using SJF");
    assert_eq!(lines[2], "P2 wait 0 turnaround 2 response 0");
    assert_eq!(lines[3], "P1 wait 2 turnaround 8 response 2");
    assert_eq!(lines[4], "P3 wait 7 turnaround 8 response 7");
}

#[test]
fn missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_classic-scheduler"))
        .arg("/nonexistent/scheduler-input.txt")
        .output()
        .expect("run classic-scheduler");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output)
        .contains("Error: File not found: /nonexistent/scheduler-input.txt"));
    assert!(output.stdout.is_empty());
}

#[test]
fn wrong_argument_count() {
    let output = Command::new(env!("CARGO_BIN_EXE_classic-scheduler"))
        .output()
        .expect("run classic-scheduler");
    assert_eq!(output.status.code(), Some(1));

    let output = Command::new(env!("CARGO_BIN_EXE_classic-scheduler"))
        .args(["a.txt", "b.txt"])
        .output()
        .expect("run classic-scheduler");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn rejects_invalid_input() {
    let cases = [
        ("use fcfs\nprocess name A arrival 0 burst 1\n", "Missing parameter processcount."),
        (
            "processcount 2\nuse fcfs\nprocess name A arrival 0 burst 1\n",
            "does not match processcount",
        ),
        (
            "processcount 1\nuse rr\nprocess name A arrival 0 burst 1\n",
            "Missing quantum parameter when use is 'rr'",
        ),
        (
            "processcount 1\nuse lifo\nprocess name A arrival 0 burst 1\n",
            "Invalid scheduling algorithm",
        ),
        (
            "processcount 1\nuse fcfs\nprocess name A burst 1\n",
            "Missing parameter 'arrival'",
        ),
        ("processcount 1\nrunfor ten\n", "Invalid parameter value"),
        ("processcount 0\nuse fcfs\n", "processcount must be at least 1"),
        (
            "processcount 2\nuse fcfs\nprocess name A arrival 18446744073709551615 burst 1\nprocess name B arrival 0 burst 1\n",
            "exceeds the simulated clock range",
        ),
    ];

    for (input, message) in cases {
        let output = run_with_input(input);
        assert_eq!(output.status.code(), Some(1), "input: {input:?}");
        assert!(
            stderr(&output).contains(message),
            "expected {message:?} in {:?}",
            stderr(&output)
        );
        assert!(output.stdout.is_empty());
    }
}
