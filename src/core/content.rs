//! Static drill tables: tasks, command pools, failure messages
//!
//! Every task carries a pool of commands that accomplish it and a pool of
//! commands that would be a mistake to let run. Pools never overlap.

use lazy_static::lazy_static;

/// A task with its acceptable and dangerous command pools
#[derive(Debug, Clone, Copy)]
pub struct Challenge {
    /// What the operator was asked to do
    pub task: &'static str,
    /// Commands that accomplish the task
    pub good: &'static [&'static str],
    /// Commands that must be interrupted
    pub bad: &'static [&'static str],
}

lazy_static! {
    // =========================================================================
    // Drill table
    // Good pool: lets the task complete. Bad pool: interrupt or regret it.
    // =========================================================================
    pub static ref CHALLENGES: Vec<Challenge> = vec![
        Challenge {
            task: "List all files in the current directory, including hidden ones.",
            good: &["ls -la", "ls -A", "ls -lah"],
            bad: &["rm -rf *", "shred -u .*", "chmod 000 ."],
        },
        Challenge {
            task: "Create a backup copy of notes.txt.",
            good: &["cp notes.txt notes.txt.bak", "cp -p notes.txt notes.backup"],
            bad: &["mv notes.txt /dev/null", "> notes.txt", "rm notes.txt"],
        },
        Challenge {
            task: "Find every TODO marker in the source tree.",
            good: &["grep -rn TODO src/", "rg TODO src/"],
            bad: &["grep -rl TODO src/ | xargs rm", "find src/ -name '*.rs' -delete"],
        },
        Challenge {
            task: "Show how much disk space the home directory uses.",
            good: &["du -sh ~", "du -sh $HOME"],
            bad: &["rm -rf ~", "dd if=/dev/zero of=~/fill.img bs=1M"],
        },
        Challenge {
            task: "Show the last 20 lines of the application log.",
            good: &["tail -n 20 app.log", "tail -20 app.log"],
            bad: &["truncate -s 0 app.log", "> app.log", "shred app.log"],
        },
        Challenge {
            task: "Stop the web server gracefully.",
            good: &["systemctl stop nginx", "kill -TERM $(cat nginx.pid)"],
            bad: &["kill -9 -1", "rm -f /usr/sbin/nginx"],
        },
        Challenge {
            task: "Check which process is listening on port 8080.",
            good: &["lsof -i :8080", "ss -ltnp | grep 8080"],
            bad: &["fuser -k 8080/tcp", "iptables -F"],
        },
        Challenge {
            task: "Show the five largest files under /var/log.",
            good: &["du -a /var/log | sort -rn | head -5", "find /var/log -type f -exec du -h {} + | sort -rh | head -5"],
            bad: &["rm -rf /var/log/*", "journalctl --vacuum-size=0"],
        },
    ];

    // =========================================================================
    // Failure messages - shown when a dangerous command runs to completion
    // =========================================================================
    pub static ref FAILURE_MESSAGES: Vec<&'static str> = vec![
        "The command finished. The files it touched are not coming back.",
        "Too slow. The prompt returned and the damage is done.",
        "It ran to completion. Hope the backups were real.",
        "The disk is quieter now. Emptier, too.",
        "Exit code 0. That is not the good news it sounds like.",
        "You watched it happen. The directory did not survive.",
    ];
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_nonempty() {
        assert!(!CHALLENGES.is_empty());
        assert!(!FAILURE_MESSAGES.is_empty());
    }

    #[test]
    fn test_every_challenge_has_both_pools() {
        for challenge in CHALLENGES.iter() {
            assert!(!challenge.task.is_empty());
            assert!(
                !challenge.good.is_empty(),
                "task '{}' has no good commands",
                challenge.task
            );
            assert!(
                !challenge.bad.is_empty(),
                "task '{}' has no bad commands",
                challenge.task
            );
        }
    }

    #[test]
    fn test_pools_never_overlap() {
        for challenge in CHALLENGES.iter() {
            for good in challenge.good {
                assert!(
                    !challenge.bad.contains(good),
                    "'{}' is in both pools for task '{}'",
                    good,
                    challenge.task
                );
            }
        }
    }
}
