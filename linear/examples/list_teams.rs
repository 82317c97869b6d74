use std::env;
use std::error::Error;

use linear::LinearClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::from_filename("./linear/.env.local").ok();
    let api_key = env::var("LINEAR_API_KEY").expect("LINEAR_API_KEY must be set");

    let client = LinearClient::new(api_key);

    let teams = client.fetch_teams().await?;
    println!("Teams:");
    for team in &teams {
        println!("{} ({})", team.name, team.key);

        let issues = client.fetch_issues(Some(&team.id)).await?;
        for issue in issues.iter().take(5) {
            let assignee = issue
                .assignee
                .as_ref()
                .map(|a| a.name.as_str())
                .unwrap_or("Unassigned");
            println!("  {} [{}] - {}", issue.title, issue.state.name, assignee);
        }
    }

    Ok(())
}
