use crate::api::{Api, RepoApi};
use crate::routes::{envelope_props, param, View};
use crate::routing::{Params, RouteEntry, SPLAT};

/// Repository pages. Every child inherits `/:owner/:repo`.
pub(super) fn routes(api: &Api) -> Vec<RouteEntry<View>> {
    let repo = api.repo.clone();

    vec![RouteEntry::new("/:owner/:repo", View::RepoHome)
        .loader(with_repo(&repo, |repo, params| async move {
            let (owner, name) = (param(&params, "owner")?, param(&params, "repo")?);
            envelope_props(repo.info(owner, name).await?)
        }))
        .children([
            RouteEntry::new("tree/:ref/*", View::RepoTree).loader(with_repo(
                &repo,
                |repo, params| async move {
                    let (owner, name) = (param(&params, "owner")?, param(&params, "repo")?);
                    let git_ref = param(&params, "ref")?;
                    let path = param(&params, SPLAT)?;
                    envelope_props(repo.tree(owner, name, git_ref, path).await?)
                },
            )),
            RouteEntry::new("blob/:ref/*", View::RepoBlob).loader(with_repo(
                &repo,
                |repo, params| async move {
                    let (owner, name) = (param(&params, "owner")?, param(&params, "repo")?);
                    let git_ref = param(&params, "ref")?;
                    let path = param(&params, SPLAT)?;
                    envelope_props(repo.blob(owner, name, git_ref, path).await?)
                },
            )),
            RouteEntry::new("commits/:ref", View::RepoCommits).loader(with_repo(
                &repo,
                |repo, params| async move {
                    let (owner, name) = (param(&params, "owner")?, param(&params, "repo")?);
                    let git_ref = param(&params, "ref")?;
                    envelope_props(repo.commits(owner, name, git_ref).await?)
                },
            )),
            RouteEntry::new("branches", View::RepoBranches).loader(with_repo(
                &repo,
                |repo, params| async move {
                    let (owner, name) = (param(&params, "owner")?, param(&params, "repo")?);
                    envelope_props(repo.branches(owner, name).await?)
                },
            )),
        ])]
}

/// Adapt a loader body that needs its own `RepoApi` handle.
fn with_repo<F, Fut>(repo: &RepoApi, body: F) -> impl Fn(Params) -> Fut + Send + Sync + 'static
where
    F: Fn(RepoApi, Params) -> Fut + Send + Sync + 'static,
{
    let repo = repo.clone();
    move |params| body(repo.clone(), params)
}
