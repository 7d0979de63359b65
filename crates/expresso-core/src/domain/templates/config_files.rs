//! Configuration-class artifacts: environment template, ignore rules, and
//! the conditional swagger/mailer config modules.

use crate::domain::{
    config::{ProjectConfig, ProjectName},
    stack::Feature,
};

/// `.env.example` content.
///
/// Every variable listed here is read by some generated source artifact for
/// the same configuration, spelled identically. The database block comes
/// from the capability registry.
pub fn env_example(config: &ProjectConfig) -> String {
    let mut content = String::from(
        r#"# Server Configuration
PORT=5000
NODE_ENV=development

# JWT Configuration
JWT_SECRET=your_jwt_secret_key_change_this_in_production
JWT_EXPIRE=7d

"#,
    );

    content.push_str(&format!("# {} Configuration\n", config.database().label()));
    content.push_str(config.database().conn_env_example());
    content.push_str("\n\n");

    if config.has(Feature::EmailTransport) {
        content.push_str(
            r#"# Email Configuration (Nodemailer)
EMAIL_HOST=smtp.gmail.com
EMAIL_PORT=587
EMAIL_USER=your_email@gmail.com
EMAIL_PASSWORD=your_app_password
EMAIL_FROM=noreply@yourapp.com

"#,
        );
    }

    content.push_str(
        r#"# CORS Configuration
CLIENT_URL=http://localhost:3000

# Rate Limiting
RATE_LIMIT_WINDOW_MS=900000
RATE_LIMIT_MAX_REQUESTS=100
"#,
    );

    content
}

/// `.gitignore` content. Configuration-independent; the Prisma section is
/// harmless for the document store.
pub fn gitignore() -> String {
    String::from(
        r#"# Dependencies
node_modules/
package-lock.json
yarn.lock

# Environment variables
.env
.env.local
.env.*.local

# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Runtime data
pids
*.pid
*.seed
*.pid.lock

# Testing
coverage/
.nyc_output

# Build files
dist/
build/

# IDE
.vscode/
.idea/
*.swp
*.swo
*~

# OS
.DS_Store
Thumbs.db

# Uploads
uploads/
public/uploads/

# Prisma
prisma/migrations/
"#,
    )
}

/// `src/config/swagger.js` content. Only planned when the api-docs toggle
/// is on; the app entry's import of this module is gated by the same toggle.
pub fn swagger_config(name: &ProjectName) -> String {
    let mut content = String::from(
        r#"/**
 * Swagger API Documentation Configuration
 */

import swaggerJsdoc from 'swagger-jsdoc';
import swaggerUi from 'swagger-ui-express';

const options = {
  definition: {
    openapi: '3.0.0',
    info: {
"#,
    );
    content.push_str(&format!("      title: '{name} API',\n"));
    content.push_str("      version: '1.0.0',\n");
    content.push_str(&format!(
        "      description: 'API documentation for {name}',\n"
    ));
    content.push_str("      contact: {\n        name: 'API Support',\n");
    content.push_str(&format!("        email: 'support@{name}.com'\n"));
    content.push_str(
        r#"      }
    },
    servers: [
      {
        url: 'http://localhost:5000',
        description: 'Development server'
      }
    ],
    components: {
      securitySchemes: {
        bearerAuth: {
          type: 'http',
          scheme: 'bearer',
          bearerFormat: 'JWT'
        }
      }
    },
    security: [
      {
        bearerAuth: []
      }
    ]
  },
  apis: ['./src/routes/*.js', './src/controllers/*.js']
};

const swaggerSpec = swaggerJsdoc(options);

export { swaggerUi, swaggerSpec };
"#,
    );
    content
}

/// `src/config/nodemailer.js` content. Only planned when the email toggle
/// is on.
pub fn mailer_config() -> String {
    String::from(
        r#"/**
 * Nodemailer Email Configuration
 */

import nodemailer from 'nodemailer';

/**
 * Create email transporter
 */
const transporter = nodemailer.createTransport({
  host: process.env.EMAIL_HOST,
  port: process.env.EMAIL_PORT,
  secure: false, // true for 465, false for other ports
  auth: {
    user: process.env.EMAIL_USER,
    pass: process.env.EMAIL_PASSWORD
  }
});

/**
 * Send email function
 * @param {Object} options - Email options
 */
export const sendEmail = async (options) => {
  const mailOptions = {
    from: process.env.EMAIL_FROM || process.env.EMAIL_USER,
    to: options.to,
    subject: options.subject,
    text: options.text,
    html: options.html
  };

  try {
    const info = await transporter.sendMail(mailOptions);
    console.log('Email sent:', info.messageId);
    return info;
  } catch (error) {
    console.error('Error sending email:', error);
    throw error;
  }
};

export default transporter;
"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stack::Database;

    fn config(database: Database, email: bool) -> ProjectConfig {
        ProjectConfig::builder("demo-api")
            .database(database)
            .email_transport(email)
            .build()
            .unwrap()
    }

    // ── env template ─────────────────────────────────────────────────────

    #[test]
    fn env_always_lists_server_and_security_variables() {
        let content = env_example(&config(Database::MongoDb, false));
        for var in [
            "PORT=5000",
            "NODE_ENV=development",
            "JWT_SECRET=",
            "JWT_EXPIRE=7d",
            "CLIENT_URL=http://localhost:3000",
            "RATE_LIMIT_WINDOW_MS=900000",
            "RATE_LIMIT_MAX_REQUESTS=100",
        ] {
            assert!(content.contains(var), "missing {var}");
        }
    }

    #[test]
    fn env_database_block_follows_the_choice() {
        let mongo = env_example(&config(Database::MongoDb, false));
        assert!(mongo.contains("# MongoDB Configuration"));
        assert!(mongo.contains("MONGO_URI=mongodb://localhost:27017/"));
        assert!(!mongo.contains("DATABASE_URL"));

        let pg = env_example(&config(Database::PostgreSql, false));
        assert!(pg.contains("# PostgreSQL Configuration"));
        assert!(pg.contains("DATABASE_URL=\"postgresql://"));

        let mysql = env_example(&config(Database::MySql, false));
        assert!(mysql.contains("DATABASE_URL=\"mysql://"));
    }

    #[test]
    fn env_email_block_present_iff_toggled() {
        let with = env_example(&config(Database::MongoDb, true));
        for var in ["EMAIL_HOST=", "EMAIL_PORT=", "EMAIL_USER=", "EMAIL_PASSWORD=", "EMAIL_FROM="] {
            assert!(with.contains(var), "missing {var}");
        }

        let without = env_example(&config(Database::MongoDb, false));
        assert!(!without.contains("EMAIL_"));
    }

    // ── swagger ──────────────────────────────────────────────────────────

    #[test]
    fn swagger_config_carries_the_project_name() {
        let name = ProjectName::new("demo-api").unwrap();
        let content = swagger_config(&name);
        assert!(content.contains("title: 'demo-api API',"));
        assert!(content.contains("description: 'API documentation for demo-api',"));
        assert!(content.contains("email: 'support@demo-api.com'"));
        assert!(content.contains("import swaggerJsdoc from 'swagger-jsdoc';"));
        assert!(content.contains("import swaggerUi from 'swagger-ui-express';"));
    }

    // ── gitignore / mailer ───────────────────────────────────────────────

    #[test]
    fn gitignore_hides_secrets_and_artifacts() {
        let content = gitignore();
        assert!(content.contains("node_modules/"));
        assert!(content.contains(".env\n"));
        assert!(content.contains("prisma/migrations/"));
    }

    #[test]
    fn mailer_reads_the_env_vars_the_template_declares() {
        let content = mailer_config();
        for var in ["EMAIL_HOST", "EMAIL_PORT", "EMAIL_USER", "EMAIL_PASSWORD", "EMAIL_FROM"] {
            assert!(content.contains(&format!("process.env.{var}")), "missing {var}");
        }
        assert!(content.contains("import nodemailer from 'nodemailer';"));
    }
}
