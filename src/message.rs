use crate::domain::DeploymentDelta;

/// Compose the chat message for a deployment.
///
/// ```
/// # use deploy_changes::domain::DeploymentDelta;
/// # use deploy_changes::message::compose;
/// assert_eq!(
///     compose("Deploy", "3", &DeploymentDelta::empty()),
///     "*Deploy #3 changes:*\n - No changes"
/// );
/// ```
pub fn compose(job_name: &str, build_number: &str, delta: &DeploymentDelta) -> String {
    let header = format!("*{} #{} changes:*", job_name, build_number);

    let body = if delta.is_empty() {
        " - No changes".to_string()
    } else {
        delta
            .entries()
            .iter()
            .map(|entry| format!(" - {}", entry))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!("{}\n{}", header, body)
}
