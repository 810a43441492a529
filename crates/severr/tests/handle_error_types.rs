//! Replays a pull-request automation tool's error catalogue through the
//! handler: each domain error carries its own severity, the handler prints
//! the banner and exits (or not) accordingly.
use severr::{
    ExtendedError, Handler, RecordedExit, ResultExt, Severity, unwrap_error, wrap_error,
};

#[derive(Debug, Clone, Copy, thiserror::Error)]
enum PrError {
    #[error("already on the last branch of the deployment workflow, no need to send further PRs")]
    AlreadyInLastBranch,
    #[error("only one branch in workflow arguments, minimum two")]
    OnlyOneBranchInWorkflow,
    #[error("TRAVIS_REPO_SLUG is not defined")]
    TravisRepoSlug,
    #[error("TRAVIS_BUILD_NUMBER is not defined")]
    TravisBuildNumber,
    #[error("TRAVIS_BUILD_ID is not defined")]
    TravisBuildId,
    #[error("TRAVIS_BRANCH is not defined")]
    TravisBranch,
    #[error("it's a PR, won't launch go-pr-creator")]
    TravisIsAPr,
    #[error("GITHUB_TOKEN is not defined")]
    GitHubToken,
    #[error("no arguments given")]
    NoArgs,
    #[error("workflow or branch params must be given")]
    WorkflowBranch,
    #[error("error connecting to github")]
    ConnectionToGithub,
    #[error("error creating Pull request")]
    PullRequest,
    #[error("error adding labels to the PR")]
    Labels,
    #[error("error creating github client")]
    GitHubClient,
    #[error("got an http code different to 200")]
    Not200,
    #[error("error obtaining the list of commits in this pull request. Please, review them manually")]
    ListingCommits,
    #[error("error updating body message")]
    UpdatingBody,
}

impl PrError {
    const ALL: [PrError; 17] = [
        PrError::AlreadyInLastBranch,
        PrError::OnlyOneBranchInWorkflow,
        PrError::TravisRepoSlug,
        PrError::TravisBuildNumber,
        PrError::TravisBuildId,
        PrError::TravisBranch,
        PrError::TravisIsAPr,
        PrError::GitHubToken,
        PrError::NoArgs,
        PrError::WorkflowBranch,
        PrError::ConnectionToGithub,
        PrError::PullRequest,
        PrError::Labels,
        PrError::GitHubClient,
        PrError::Not200,
        PrError::ListingCommits,
        PrError::UpdatingBody,
    ];

    fn severity(self) -> Severity {
        match self {
            PrError::AlreadyInLastBranch | PrError::TravisIsAPr => Severity::Low,
            PrError::Labels
            | PrError::Not200
            | PrError::ListingCommits
            | PrError::UpdatingBody => Severity::Info,
            _ => Severity::High,
        }
    }

    fn expected_exit(self) -> Option<i32> {
        match self.severity() {
            Severity::Low => Some(0),
            Severity::Info => None,
            _ => Some(1),
        }
    }
}

fn extended(err: PrError) -> ExtendedError {
    ExtendedError::new(err, err.severity()).expect("catalogue messages are non-empty")
}

#[test]
fn catalogue_renders_banner_and_exit_code() {
    for err in PrError::ALL {
        let mut handler = Handler::new(Vec::new(), RecordedExit::default());
        handler.handle(extended(err));

        let (output, exit) = handler.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, format!("Error:\n  {err}\n"), "{err:?}");
        assert_eq!(exit.last(), err.expected_exit(), "{err:?}");
        assert!(exit.count() <= 1, "{err:?}");
    }
}

#[test]
fn one_handler_serves_many_info_errors() {
    let mut handler = Handler::new(Vec::new(), RecordedExit::default());
    for err in [PrError::Labels, PrError::Not200, PrError::UpdatingBody] {
        extended(err).handle_with(&mut handler);
    }

    let (output, exit) = handler.into_parts();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Error:\n  error adding labels to the PR\n\
         Error:\n  got an http code different to 200\n\
         Error:\n  error updating body message\n"
    );
    assert_eq!(exit.count(), 0);
}

#[test]
fn reassigned_severity_changes_only_the_exit() {
    let mut err = extended(PrError::PullRequest);
    err.set_severity(Severity::Severe);

    let mut handler = Handler::new(Vec::new(), RecordedExit::default());
    handler.handle(err);

    assert_eq!(handler.output(), b"Error:\n  error creating Pull request\n");
    assert_eq!(handler.terminator().codes(), &[2]);
}

#[test]
fn wrapped_domain_error_keeps_cause_and_detail() {
    let wrapped = wrap_error(PrError::ConnectionToGithub, "401 Bad credentials");
    assert_eq!(unwrap_error(&wrapped).to_string(), "error connecting to github");

    let mut handler = Handler::new(Vec::new(), RecordedExit::default());
    let result: Result<(), _> = Err(wrapped);
    assert!(result.or_handle(Severity::High, &mut handler).is_none());

    assert_eq!(
        handler.output(),
        b"Error:\n  error connecting to github:\n    401 Bad credentials\n"
    );
    assert_eq!(handler.terminator().codes(), &[1]);
}
