use assert_cmd::Command;
use insta::assert_snapshot;
use tempfile::tempdir;
use test_case::test_case;

const ATLANTIC: [&str; 6] =
    ["-0.379", "-1.030", "1.410", "0.891", "-0.052", "-4.910"];

const ICELAND: &str = "\
PDEQ2014 10 15 11 16 34.00  64.4500  -18.0400  10.0 0.0 5.1 ICELAND
event name:     201410151116A
time shift:      8.2300
half duration:   1.5000
latitude:       64.6000
longitude:     -17.3000
depth:          12.0000
Mrr:      -3.260000e+24
Mtt:       1.960000e+24
Mpp:       1.300000e+24
Mrt:      -6.790000e+22
Mrp:      -6.030000e+23
Mtp:      -2.030000e+23
";

/// run `bin` with `args`, assert that it succeeded, and return its stdout
fn run(bin: &str, args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    let output = cmd.args(args).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// run `bin` with `args`, assert that it failed, and return its stderr
fn fail(bin: &str, args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    let output = cmd.args(args).output().unwrap();
    assert!(!output.status.success());
    String::from_utf8(output.stderr).unwrap()
}

#[test]
fn mtdec_cmtfile() -> std::io::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("CMTSOLUTION");
    std::fs::write(&path, ICELAND)?;
    let got = run("mtdec", &["-c", path.to_str().unwrap()]);
    assert!(got.contains("event name: 201410151116A"));
    assert!(got.contains("region: ICELAND, origin: 2014-10-15T11:16:34"));
    assert!(got.contains("percentage of ISO  : 0.00 %"), "{got}");
    assert!(got.contains("percentage of DC   : 20.92 %"), "{got}");
    assert!(got.contains("percentage of CLVD : 79.08 %"), "{got}");
    Ok(())
}

#[test]
fn mtdec_json() {
    let got = run(
        "mtdec",
        &[
            "--json", "-m", "-3.26", "1.96", "1.30", "-0.0679", "-0.603",
            "-0.203",
        ],
    );
    let v: serde_json::Value = serde_json::from_str(&got).unwrap();
    let dc = v["dc"].as_f64().unwrap();
    let clvd = v["clvd"].as_f64().unwrap();
    assert!((dc - 20.9246).abs() < 1e-3, "dc = {dc}");
    assert!((clvd + 79.0754).abs() < 1e-3, "clvd = {clvd}");
}

#[test]
fn mtdec_double_couple() {
    let got = run("mtdec", &["-m", "0.7071", "0", "-0.7071", "0", "0", "0"]);
    assert!(got.contains("percentage of DC   : 100.00 %"), "{got}");
}

#[test_case(
    &["-m", "0", "0", "0", "0", "0", "0"],
    "moment tensor is zero";
    "zero"
)]
#[test_case(&["-c", "no_such.cmt"], "no_such.cmt"; "missing file")]
#[test_case(&[], "required"; "no input")]
#[test_case(
    &["-c", "x", "-m", "1", "2", "3", "4", "5", "6"],
    "cannot be used with";
    "both inputs"
)]
fn mtdec_errors(args: &[&str], want: &str) {
    let got = fail("mtdec", args);
    assert!(got.contains(want), "{got}");
}

#[test]
fn mtdec_missing_field() -> std::io::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("CMTSOLUTION");
    let truncated: String =
        ICELAND.lines().take(12).map(|l| format!("{l}\n")).collect();
    std::fs::write(&path, truncated)?;
    let got = fail("mtdec", &["-c", path.to_str().unwrap()]);
    assert!(got.contains("missing required field 'Mtp'"), "{got}");
    Ok(())
}

#[test]
fn nodal() {
    let got = run("nodal", &["321", "69", "-173"]);
    assert!(got.contains("NP1: Strike = 321 Dip = 69 Rake = -173"), "{got}");
    assert!(got.contains("NP2: Strike = 228 Dip = 83 Rake = -21"), "{got}");
    assert!(got.contains("T axis"));
    assert!(got.contains("Mrr:"));
}

#[test]
fn nodal_horizontal() {
    let got = fail("nodal", &["40", "0", "30"]);
    assert!(got.contains("horizontal nodal plane"), "{got}");
}

#[test]
fn beachball() {
    let got = run("beachball", &["--fm", "0", "45", "90", "-r", "4"]);
    let lines: Vec<_> = got.lines().collect();
    assert_eq!(lines[0], "Draw beachball from nodal plane");
    assert_eq!(lines[1], "NP1: Strike = 0 Dip = 45 Rake = 90");
    assert_eq!(lines[2], "NP2: Strike = 180 Dip = 45 Rake = 90");
    let ball = &lines[4..];
    assert_eq!(ball.len(), 9);
    assert_eq!(ball[4].chars().nth(8), Some('#'));
}

#[test]
fn beachball_tensor() {
    let got = run(
        "beachball",
        &["--fm", "-3.26", "1.96", "1.30", "-0.0679", "-0.603", "-0.203"],
    );
    assert!(got.starts_with("Draw beachball from moment tensor"));
    assert_eq!(got.lines().filter(|l| l.starts_with("NP")).count(), 2);
}

#[test]
fn beachball_wrong_count() {
    let got = fail("beachball", &["--fm", "1", "2", "3", "4"]);
    assert!(got.contains("got 4"), "{got}");
}

#[test_case(&["--np", "0", "45", "90"], "reverse"; "reverse")]
#[test_case(&["--np", "0", "45", "-90"], "normal"; "normal")]
#[test_case(&["--np", "0", "90", "0"], "strike-slip"; "strike slip")]
fn ternary(args: &[&str], class: &str) {
    let got = run("ternary", args);
    let fields: Vec<_> = got.split_whitespace().collect();
    assert_eq!(fields[0], "1");
    assert_eq!(fields[1], class);
}

#[test]
fn ternary_atlantic() {
    let mut args = vec!["--mt"];
    args.extend(ATLANTIC);
    let got = run("ternary", &args);
    assert_eq!(
        got.trim(),
        "1 strike-slip  strike-slip = 0.798 normal = 0.118 reverse = 0.084 \
         (x = -0.029, y = 0.697)"
    );
}

#[test]
fn ternary_infile() -> std::io::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("mechanisms.txt");
    std::fs::write(
        &path,
        "# Mrr Mtt Mpp Mrt Mrp Mtp\n\
         0.7071 0 -0.7071 0 0 0\n\
         1 1 1 0 0 0\n",
    )?;
    let got = run("ternary", &["--infile", path.to_str().unwrap()]);
    let lines: Vec<_> = got.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("reverse"));
    assert!(lines[1].contains("undefined"));
    Ok(())
}

#[test]
fn mw2m0() {
    assert_snapshot!(run("mw2m0", &["7"]), @r"
    Mw = 7.00
    M0 = 3.548e19 N.m
    Es = 5.677e14 J
    ");
}

#[test]
fn m02mw() {
    assert_snapshot!(run("m02mw", &["--dyne", "1e27"]), @r"
    M0 = 1.000e20 N.m (1.000e27 dyne.cm)
    Mw = 7.30
    Es = 1.600e15 J
    ");
    let got = run("m02mw", &["3.548e19"]);
    assert!(got.contains("Mw = 7.00"), "{got}");
}

#[test]
fn timestamps() {
    assert_snapshot!(
        run("ts2date", &["0", "--tz", "UTC"]),
        @"1970-01-01 00:00:00"
    );
    assert_snapshot!(
        run("date2ts", &["2014-10-15T11:16:34", "--tz", "UTC"]),
        @"1413371794"
    );
    let got = run("ts2date", &["-303281320", "--tz", "UTC"]);
    assert_eq!(got.trim(), "1960-05-22 19:11:20");
}

#[test]
fn bad_date() {
    fail("date2ts", &["2014-10-15 11:16:34", "--tz", "UTC"]);
}
