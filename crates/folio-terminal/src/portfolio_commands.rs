//! Portfolio commands: help, about, skills, projects, blog, contact, social,
//! whoami, date, pwd, ls, git.
//!
//! Content comes from the configured [`Profile`](folio_types::config::Profile),
//! so none of these commands hold state of their own.

use folio_types::error::Result;

use crate::builtin::Builtin;
use crate::fragment::{Fragment, Span, Style};
use crate::interpreter::{Command, CommandTable, Context};

/// Column width for `help` listings.
const HELP_NAME_WIDTH: usize = 12;

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show this help message"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        let mut f = Fragment::line(Style::Info, "Available commands:");
        for (name, desc) in ctx.table.list() {
            if Builtin::parse(name).is_some() {
                continue;
            }
            f.push_line(Style::Info, format!("  {name:HELP_NAME_WIDTH$}- {desc}"));
        }
        f.push_blank();
        for b in Builtin::ALL {
            f.push_line(
                Style::Info,
                format!("  {:HELP_NAME_WIDTH$}- {}", b.name(), b.description()),
            );
        }
        f.push_blank();
        f.push_line(
            Style::Muted,
            "Pro tip: Use up/down arrow keys to navigate command history!",
        );
        Ok(f)
    }
}

// ---------------------------------------------------------------------------
// about / whoami
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Learn more about me"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        Ok(Fragment::lines(Style::Info, ctx.profile.about.iter().cloned()))
    }
}

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user info"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        Ok(Fragment::line(Style::Muted, ctx.profile.whoami.as_str())
            .with_line(Style::Muted, ctx.profile.tagline.as_str()))
    }
}

// ---------------------------------------------------------------------------
// skills / projects / blog
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "View my technical skills"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        let mut f = Fragment::line(Style::Muted, "Technical Skills:");
        let groups = &ctx.profile.skills;
        for (i, group) in groups.iter().enumerate() {
            let branch = if i + 1 == groups.len() {
                "└──"
            } else {
                "├──"
            };
            f.push_line(
                Style::Muted,
                format!("{branch} {}: {}", group.label, group.items.join(", ")),
            );
        }
        Ok(f)
    }
}

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "Browse my projects"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        let mut f = Fragment::line(Style::Muted, "Featured Projects:");
        for (i, project) in ctx.profile.projects.iter().enumerate() {
            let line = if project.summary.is_empty() {
                format!("{}. {}", i + 1, project.name)
            } else {
                format!("{}. {} - {}", i + 1, project.name, project.summary)
            };
            f.push_line(Style::Muted, line);
        }
        f.push_blank();
        f.push_line(
            Style::Muted,
            "Type 'git clone <project-name>' to learn more about each project.",
        );
        Ok(f)
    }
}

struct BlogCmd;
impl Command for BlogCmd {
    fn name(&self) -> &str {
        "blog"
    }
    fn description(&self) -> &str {
        "Read my latest blog posts"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        let posts = &ctx.profile.posts;
        if posts.is_empty() {
            return Ok(Fragment::line(Style::Info, "No posts yet."));
        }
        let mut f = Fragment::line(Style::Info, "Latest Blog Posts:");
        for post in posts {
            if post.date.is_empty() {
                f.push_line(Style::Info, format!("• \"{}\"", post.title));
            } else {
                f.push_line(Style::Info, format!("• \"{}\" - {}", post.title, post.date));
            }
        }
        f.push_blank();
        f.push_line(Style::Info, "Type 'cd blog' for full articles and archive.");
        Ok(f)
    }
}

// ---------------------------------------------------------------------------
// contact / social
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Get in touch with me"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        let mut f = Fragment::line(Style::Success, "Contact Information:");
        for link in &ctx.profile.contact {
            f.push_line(Style::Success, format!("{}: {}", link.label, link.value));
        }
        f.push_blank();
        f.push_line(
            Style::Success,
            "Feel free to reach out for collaborations or opportunities!",
        );
        Ok(f)
    }
}

struct SocialCmd;
impl Command for SocialCmd {
    fn name(&self) -> &str {
        "social"
    }
    fn description(&self) -> &str {
        "Find me on social media"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        let mut f = Fragment::line(Style::Info, "Find me on:");
        for link in &ctx.profile.social {
            f.push_line(Style::Info, format!("• {}: {}", link.label, link.value));
        }
        Ok(f)
    }
}

// ---------------------------------------------------------------------------
// date / pwd / ls
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show current date and time"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        Ok(Fragment::line(
            Style::Muted,
            ctx.now.format("%a %b %e %Y %H:%M:%S %:z").to_string(),
        ))
    }
}

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        Ok(Fragment::line(Style::Muted, ctx.profile.home_dir.as_str()))
    }
}

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        let files = &ctx.profile.files;
        let mut f = Fragment::line(Style::Muted, format!("total {}", files.len()));
        for name in files {
            // Directories are marked by a trailing slash.
            let style = if name.ends_with('/') {
                Style::Info
            } else {
                Style::Plain
            };
            f.push_spans(vec![Span::new(style, name.as_str())]);
        }
        Ok(f)
    }
}

// ---------------------------------------------------------------------------
// git
// ---------------------------------------------------------------------------

struct GitCmd;
impl Command for GitCmd {
    fn name(&self) -> &str {
        "git"
    }
    fn description(&self) -> &str {
        "Clone a project to learn more"
    }
    fn usage(&self) -> &str {
        "git clone <project>"
    }
    fn execute(&self, args: &[&str], ctx: &Context<'_>) -> Result<Fragment> {
        if !args.first().is_some_and(|a| a.eq_ignore_ascii_case("clone")) {
            return Ok(Fragment::line(Style::Muted, format!("usage: {}", self.usage())));
        }
        let wanted = args.get(1).copied().unwrap_or("project");
        let mut f = Fragment::line(
            Style::Error,
            format!("Project '{wanted}' repository details will be available soon!"),
        );
        let known = ctx
            .profile
            .projects
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(wanted));
        if let Some(p) = known.filter(|p| !p.summary.is_empty()) {
            f.push_line(Style::Muted, format!("{}: {}", p.name, p.summary));
        }
        Ok(f)
    }
}

/// Register every portfolio command, in the order `help` lists them.
pub fn register_portfolio_commands(table: &mut CommandTable) -> Result<()> {
    table.register(Box::new(HelpCmd))?;
    table.register(Box::new(AboutCmd))?;
    table.register(Box::new(SkillsCmd))?;
    table.register(Box::new(ProjectsCmd))?;
    table.register(Box::new(BlogCmd))?;
    table.register(Box::new(ContactCmd))?;
    table.register(Box::new(SocialCmd))?;
    table.register(Box::new(WhoamiCmd))?;
    table.register(Box::new(DateCmd))?;
    table.register(Box::new(PwdCmd))?;
    table.register(Box::new(LsCmd))?;
    table.register(Box::new(GitCmd))?;
    Ok(())
}
