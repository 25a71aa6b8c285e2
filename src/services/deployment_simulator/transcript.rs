// Build log snapshots. Each stage replaces the whole log with a longer one.

const INSTALLING: &str = "Installing dependencies...\n";

const BUILT: &str = "✓ Dependencies installed (234 packages)\n\
\n\
Building project...\n\
✓ TypeScript compilation successful\n\
✓ Assets optimized\n";

const PUBLISHED: &str = "\n\
Deploying to CDN...\n\
✓ Files uploaded\n\
✓ DNS configured\n\
\n\
Deployment successful!\n\
Your site is live at ";

pub fn building_log() -> String {
    INSTALLING.to_string()
}

pub fn deploying_log() -> String {
    format!("{}{}", INSTALLING, BUILT)
}

pub fn success_log(url: &str) -> String {
    format!("{}{}{}{}", INSTALLING, BUILT, PUBLISHED, url)
}
