//! Database connection templates for `src/config/db.js`.
//!
//! The document store connects through Mongoose and registers a SIGINT
//! shutdown hook for its connection; the relational choices connect through
//! a shared Prisma client and register both SIGINT and SIGTERM hooks. All
//! three log through chalk, which the resolver carries in the baseline
//! runtime set for exactly this reason.

use crate::domain::stack::Database;

/// Connection module content, selected by `database`.
pub fn database_config(database: Database) -> String {
    match database {
        Database::MongoDb => mongo_config(),
        Database::PostgreSql | Database::MySql => prisma_config(database.label()),
    }
}

fn mongo_config() -> String {
    String::from(
        r#"/**
 * MongoDB Database Configuration
 * Using Mongoose ORM
 */

import mongoose from 'mongoose';
import chalk from 'chalk';

/**
 * Connect to MongoDB database
 */
export async function connectDB() {
  try {
    const conn = await mongoose.connect(process.env.MONGO_URI, {
      // Mongoose 6+ no longer needs these options:
      // useNewUrlParser: true,
      // useUnifiedTopology: true,
    });

    console.log(chalk.green.bold(`✅ MongoDB Connected: ${conn.connection.host}`));

    // Connection events
    mongoose.connection.on('error', (err) => {
      console.error(chalk.red('MongoDB connection error:'), err);
    });

    mongoose.connection.on('disconnected', () => {
      console.log(chalk.yellow('MongoDB disconnected'));
    });

    // Graceful shutdown
    process.on('SIGINT', async () => {
      await mongoose.connection.close();
      console.log(chalk.yellow('MongoDB connection closed due to app termination'));
      process.exit(0);
    });

  } catch (error) {
    console.error(chalk.red.bold('❌ MongoDB connection failed:'), error.message);
    process.exit(1);
  }
}
"#,
    )
}

/// Prisma connection module; the two relational backends differ only in the
/// display label.
fn prisma_config(label: &str) -> String {
    let mut content = format!(
        "/**\n * {label} Database Configuration\n * Using Prisma ORM\n */\n\n"
    );
    content.push_str(
        r#"import { PrismaClient } from '@prisma/client';
import chalk from 'chalk';

// Initialize Prisma Client
const prisma = new PrismaClient({
  log: ['query', 'info', 'warn', 'error'],
});

"#,
    );
    content.push_str(&format!("/**\n * Connect to {label} database\n */\n"));
    content.push_str(
        r#"export async function connectDB() {
  try {
    await prisma.$connect();
"#,
    );
    content.push_str(&format!(
        "    console.log(chalk.green.bold('✅ {label} Connected via Prisma'));\n"
    ));
    content.push_str(
        r#"
    // Graceful shutdown
    process.on('SIGINT', async () => {
      await prisma.$disconnect();
"#,
    );
    content.push_str(&format!(
        "      console.log(chalk.yellow('{label} connection closed due to app termination'));\n"
    ));
    content.push_str(
        r#"      process.exit(0);
    });

    process.on('SIGTERM', async () => {
      await prisma.$disconnect();
      process.exit(0);
    });

  } catch (error) {
"#,
    );
    content.push_str(&format!(
        "    console.error(chalk.red.bold('❌ {label} connection failed:'), error.message);\n"
    ));
    content.push_str(
        r#"    await prisma.$disconnect();
    process.exit(1);
  }
}

// Export prisma instance for use in other modules
export { prisma };
"#,
    );
    content
}
