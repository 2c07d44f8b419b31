use portfolio_core_showcase_contracts::{
    ShowcaseFeatureService, ShowcaseGetBlogPostError, ShowcaseOverview,
    ShowcaseSetBlogPostPublishedError, ShowcaseSetProjectFeaturedError, SkillGroup,
};
use portfolio_di::Build;
use portfolio_models::{
    blog::{BlogPost, BlogPostFilter, BlogPostSlug},
    project::{Project, ProjectFilter, ProjectId},
    skill::Skill,
};
use portfolio_persistence_contracts::{
    blog::BlogRepository, project::ProjectRepository, skill::SkillRepository, Database,
    Transaction,
};
use portfolio_shared_contracts::time::TimeService;
use portfolio_utils::trace_instrument;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Build)]
pub struct ShowcaseFeatureServiceImpl<Db, Time, ProjectRepo, SkillRepo, BlogRepo> {
    db: Db,
    time: Time,
    project_repo: ProjectRepo,
    skill_repo: SkillRepo,
    blog_repo: BlogRepo,
}

const PUBLISHED: BlogPostFilter = BlogPostFilter {
    published: Some(true),
};

impl<Db, Time, ProjectRepo, SkillRepo, BlogRepo> ShowcaseFeatureService
    for ShowcaseFeatureServiceImpl<Db, Time, ProjectRepo, SkillRepo, BlogRepo>
where
    Db: Database,
    Time: TimeService,
    ProjectRepo: ProjectRepository<Db::Transaction>,
    SkillRepo: SkillRepository<Db::Transaction>,
    BlogRepo: BlogRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn list_projects(&self) -> anyhow::Result<Vec<Project>> {
        let mut txn = self.db.begin_transaction().await?;
        self.project_repo
            .list(&mut txn, ProjectFilter::default(), None)
            .await
    }

    #[trace_instrument(skip(self))]
    async fn list_skills(&self) -> anyhow::Result<Vec<SkillGroup>> {
        let mut txn = self.db.begin_transaction().await?;
        self.skill_repo.list(&mut txn).await.map(group_skills)
    }

    #[trace_instrument(skip(self))]
    async fn list_blog_posts(&self) -> anyhow::Result<Vec<BlogPost>> {
        let mut txn = self.db.begin_transaction().await?;
        self.blog_repo.list(&mut txn, PUBLISHED, None).await
    }

    #[trace_instrument(skip(self))]
    async fn get_blog_post(&self, slug: BlogPostSlug) -> Result<BlogPost, ShowcaseGetBlogPostError> {
        let mut txn = self.db.begin_transaction().await?;

        self.blog_repo
            .get_by_slug(&mut txn, &slug)
            .await?
            .filter(|post| post.published)
            .ok_or(ShowcaseGetBlogPostError::NotFound)
    }

    #[trace_instrument(skip(self))]
    async fn get_overview(&self) -> anyhow::Result<ShowcaseOverview> {
        let mut txn = self.db.begin_transaction().await?;

        let featured_projects = self
            .project_repo
            .list(
                &mut txn,
                ProjectFilter {
                    featured: Some(true),
                },
                Some(ShowcaseOverview::FEATURED_PROJECTS),
            )
            .await?;

        let skills = self.skill_repo.list(&mut txn).await.map(group_skills)?;

        let recent_blog_posts = self
            .blog_repo
            .list(&mut txn, PUBLISHED, Some(ShowcaseOverview::RECENT_BLOG_POSTS))
            .await?;

        Ok(ShowcaseOverview {
            featured_projects,
            skills,
            recent_blog_posts,
        })
    }

    #[trace_instrument(skip(self))]
    async fn set_project_featured(
        &self,
        id: ProjectId,
        featured: bool,
    ) -> Result<(), ShowcaseSetProjectFeaturedError> {
        let mut txn = self.db.begin_transaction().await?;

        if !self
            .project_repo
            .update_featured(&mut txn, id, featured)
            .await?
        {
            return Err(ShowcaseSetProjectFeaturedError::NotFound);
        }

        txn.commit().await?;

        Ok(())
    }

    #[trace_instrument(skip(self))]
    async fn set_blog_post_published(
        &self,
        slug: BlogPostSlug,
        published: bool,
    ) -> Result<(), ShowcaseSetBlogPostPublishedError> {
        let mut txn = self.db.begin_transaction().await?;

        if !self
            .blog_repo
            .update_published(&mut txn, &slug, published, self.time.now())
            .await?
        {
            return Err(ShowcaseSetBlogPostPublishedError::NotFound);
        }

        txn.commit().await?;

        Ok(())
    }
}

/// Groups skills by category, keeping the order in which the categories
/// first appear.
fn group_skills(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups = Vec::<SkillGroup>::new();
    for skill in skills {
        match groups.iter_mut().find(|x| x.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category,
                skills: vec![skill],
            }),
        }
    }
    groups
}
