use std::process::{Command, Output};

fn lotto649(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lotto649"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("could not run lotto649 {:?}: {}", args, e))
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn five_tickets_by_default() {
    let output = lotto649(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 5);

    let output = lotto649(&["--unique"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 5);
}

#[test]
fn as_many_tickets_as_asked() {
    for n in [1, 3, 20] {
        let count = n.to_string();
        let output = lotto649(&[count.as_str()]);
        assert!(output.status.success());
        assert_eq!(stdout(&output).lines().count(), n);
    }
}

#[test]
fn invalid_counts() {
    for arg in ["0", "-3", "abc"] {
        for extra in [&[][..], &["--unique"][..]] {
            let mut args = vec![arg];
            args.extend_from_slice(extra);

            let output = lotto649(&args);
            assert_eq!(output.status.code(), Some(1), "{:?} should fail", args);
            assert!(output.stdout.is_empty(), "{:?} should not draw", args);

            let stderr = String::from_utf8(output.stderr).unwrap();
            assert!(
                stderr.contains("invalid ticket count"),
                "unexpected error for {:?}: {}",
                args,
                stderr
            );
        }
    }
}

#[test]
fn basic_format() {
    let output = lotto649(&["10", "--prng-seed", "0100000000000000"]);
    assert!(output.status.success());

    for line in stdout(&output).lines() {
        let numbers: Vec<u8> = line
            .split(' ')
            .map(|x| {
                assert_eq!(x.len(), 2, "`{}` is not zero-padded", x);
                x.parse().unwrap()
            })
            .collect();
        assert_eq!(numbers.len(), 6);
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn unique_format() {
    let output = lotto649(&["12", "--unique", "--prng-seed", "0100000000000000"]);
    assert!(output.status.success());

    for (i, line) in stdout(&output).lines().enumerate() {
        let prefix = format!("Ticket {:>2}: ", i + 1);
        assert!(line.starts_with(&prefix), "bad prefix in `{}`", line);

        let (numbers, bonus) = line[prefix.len()..].split_once("   Bonus ").unwrap();
        let numbers: Vec<u8> = numbers.split(' ').map(|x| x.parse().unwrap()).collect();
        let bonus: u8 = bonus.parse().unwrap();

        assert_eq!(numbers.len(), 6);
        assert!(!numbers.contains(&bonus));
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    for variant in [&[][..], &["--unique"][..]] {
        let mut args = vec!["8", "--prng-seed", "deadbeefdeadbeef"];
        args.extend_from_slice(variant);

        let a = lotto649(&args);
        let b = lotto649(&args);
        assert!(a.status.success());
        assert_eq!(stdout(&a), stdout(&b));
    }
}

#[test]
fn invalid_seed() {
    let output = lotto649(&["--prng-seed", "not a seed"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
