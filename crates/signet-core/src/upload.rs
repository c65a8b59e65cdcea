//! Uploading new file content as blobs.

use futures::future::try_join_all;
use signet_git::ObjectId;
use signet_github::{CreateBlob, GitHubApi};
use tracing::debug;

use crate::error::{Error, Result};
use crate::target::RepoCoordinates;
use crate::tree::{EntryContent, TreeEntry};

/// Upload every inline entry as a base64 blob and replace its content with
/// the returned blob id.
///
/// Uploads run concurrently. The first failure is returned as soon as it
/// arrives and the uploads still in flight are dropped; entries whose upload
/// completed before that keep their new ids.
///
/// Returns the number of blobs uploaded.
///
/// # Errors
/// Returns the first API error from any upload.
pub async fn upload_blobs<H: GitHubApi>(
    api: &H,
    repo: &RepoCoordinates,
    entries: &mut [TreeEntry],
) -> Result<usize> {
    let uploads = entries.iter_mut().filter_map(move |entry| {
        let EntryContent::Inline(bytes) = &entry.content else {
            return None;
        };
        let request = CreateBlob::base64(bytes);

        Some(async move {
            let blob = api.create_blob(&repo.owner, &repo.repo, &request).await?;
            debug!(path = %entry.path, sha = %blob.sha, "uploaded blob");
            entry.content = EntryContent::Reference(ObjectId::new(blob.sha));
            Ok::<_, Error>(())
        })
    });

    Ok(try_join_all(uploads).await?.len())
}
