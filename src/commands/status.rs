use std::io::Write;
use std::path::Path;
use std::process::Command;

use crate::printer::Printer;

pub const NAME: &str = "status";

/// Home directory of the server account whose layout is inspected.
pub const FLY_HOME: &str = "/home/fly";

/// Paths checked under [`FLY_HOME`], with the label used in the report.
const LAYOUT: [(&str, &str); 6] = [
    (".fly", "Root .fly directory"),
    (".fly/docker-compose.yml", "Root docker-compose.yml"),
    (".provisions", ".provisions directory"),
    (".fly/database/mysql", "MySQL directory"),
    (".fly/database/redis", "Redis directory"),
    (".fly/nginx", "Nginx directory"),
];

/// One line per expected path under `home`, saying whether it exists.
pub fn layout_report(home: &Path) -> Vec<String> {
    LAYOUT
        .iter()
        .map(|(relative, label)| {
            if home.join(relative).exists() {
                format!("{label} exists")
            } else {
                format!("{label} does not exist")
            }
        })
        .collect()
}

/// Reports whether the docker client is installed and the daemon answers.
pub fn docker_report() -> Vec<String> {
    let installed = match docker(&["version", "--format", "{{.Server.Version}}"]) {
        Some(version) => format!("Docker is installed, version: {}", version.trim()),
        None => "Docker is not installed".to_owned(),
    };
    let running = match docker(&["version"]) {
        Some(_) => "Docker is running",
        None => "Docker is not running",
    };

    vec![installed, running.to_owned()]
}

fn docker(args: &[&str]) -> Option<String> {
    match Command::new("docker").args(args).output() {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            tracing::debug!(
                target: "fly::status",
                status = %output.status,
                "docker exited with failure"
            );
            None
        }
        Err(error) => {
            tracing::debug!(target: "fly::status", %error, "failed to run docker");
            None
        }
    }
}

pub fn run<W: Write>(_argv: &[String], printer: &mut Printer<W>) {
    for line in layout_report(Path::new(FLY_HOME))
        .into_iter()
        .chain(docker_report())
    {
        printer.display(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reports_missing_layout() {
        let tmp = tempdir().unwrap();
        let report = layout_report(tmp.path());

        assert_eq!(report.len(), LAYOUT.len());
        assert_eq!(report[0], "Root .fly directory does not exist");
        assert!(report.iter().all(|line| line.ends_with("does not exist")));
    }

    #[test]
    fn reports_present_layout() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join(".fly/database/mysql")).unwrap();
        fs::create_dir_all(tmp.path().join(".fly/nginx")).unwrap();
        fs::write(tmp.path().join(".fly/docker-compose.yml"), "services: {}\n").unwrap();

        let report = layout_report(tmp.path());

        assert_eq!(
            report,
            vec![
                "Root .fly directory exists",
                "Root docker-compose.yml exists",
                ".provisions directory does not exist",
                "MySQL directory exists",
                "Redis directory does not exist",
                "Nginx directory exists",
            ]
        );
    }

    #[test]
    fn docker_report_has_two_lines() {
        let report = docker_report();

        assert_eq!(report.len(), 2);
        assert!(report[0].starts_with("Docker is"));
        assert!(report[1] == "Docker is running" || report[1] == "Docker is not running");
    }
}
