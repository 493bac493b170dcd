//! Personal profile texts shown by the terminal

pub const LINKEDIN_URL: &str = "https://linkedin.com/in/dhanuwardhana";
pub const GITHUB_URL: &str = "https://github.com/Dhanuwrdhn";
pub const CV_URL: &str =
    "https://drive.google.com/file/d/1d1aNuconWr57IjbvdXAzqjwWf2nxtxl4/view?usp=sharing";

pub const WHOIS: &str = "Hey there! I'm a tech enthusiast with an Information Technology degree
from Universitas Budiluhur who loves diving into new technologies.

My playground includes web development, mobile apps, and AI implementation
- areas where I get to combine creativity with technical expertise.

I'm particularly fascinated by AI and emerging tech, always eager to explore
what's next in these rapidly evolving fields.

Recently, I had the exciting opportunity to lead a development team where
we successfully delivered 6 diverse projects, ranging from web platforms
to AI-powered monitoring tools.

Whether it's crafting user-friendly interfaces or implementing smart solutions,
I'm all about creating technology that makes a real impact.";

/// `social` command output
pub fn social_links() -> String {
    format!("LinkedIn: {}\nGitHub: {}", LINKEDIN_URL, GITHUB_URL)
}
