//! List tags across all posts

use anyhow::Result;

use crate::Blog;

/// Print every tag, optionally with the number of posts carrying it
pub async fn run(blog: &Blog, count: bool) -> Result<()> {
    let filter = blog.post_filter().await.map_err(|e| super::report(e, false))?;

    if count {
        let counts = filter.tag_counts();
        println!("Tags ({}):", counts.len());
        for (tag, count) in counts {
            println!("  {} ({})", tag, count);
        }
    } else {
        let tags = filter.available_tags();
        println!("Tags ({}):", tags.len());
        for tag in tags {
            println!("  {}", tag);
        }
    }

    Ok(())
}
