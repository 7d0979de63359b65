//! Source-class artifacts: the application entry point, the health-check
//! pair, the two middleware modules, and the conditional validation and
//! model artifacts.
//!
//! The app entry is the only generator here that branches on configuration:
//! every reference to the swagger module (import, route mount, startup log)
//! is gated by the api-docs toggle, so a disabled toggle leaves no trace of
//! the documentation artifact anywhere in the file.

use crate::domain::{config::ProjectConfig, stack::Feature};

/// `src/app.js` content.
pub fn app_entry(config: &ProjectConfig) -> String {
    let mut content = String::from(
        r#"/**
 * Main Application Entry Point
 * Express.js server with all configurations
 */

import express from 'express';
import dotenv from 'dotenv';
import cors from 'cors';
import helmet from 'helmet';
import cookieParser from 'cookie-parser';
import rateLimit from 'express-rate-limit';
import { connectDB } from './config/db.js';
import { errorHandler } from './middleware/errorHandler.js';
import healthRoutes from './routes/healthRoutes.js';
"#,
    );

    if config.has(Feature::ApiDocs) {
        content.push_str("import { swaggerUi, swaggerSpec } from './config/swagger.js';\n");
    }

    content.push_str(
        r#"
// Load environment variables
dotenv.config();

// Initialize Express app
const app = express();

// Connect to database
connectDB();

// Security middleware
app.use(helmet());

// CORS configuration
app.use(cors({
  origin: process.env.CLIENT_URL || 'http://localhost:3000',
  credentials: true
}));

// Body parser middleware
app.use(express.json());
app.use(express.urlencoded({ extended: true }));

// Cookie parser
app.use(cookieParser());

// Rate limiting
const limiter = rateLimit({
  windowMs: parseInt(process.env.RATE_LIMIT_WINDOW_MS) || 15 * 60 * 1000, // 15 minutes
  max: parseInt(process.env.RATE_LIMIT_MAX_REQUESTS) || 100,
  message: 'Too many requests from this IP, please try again later.',
  standardHeaders: true,
  legacyHeaders: false,
});

app.use('/api/', limiter);
"#,
    );

    if config.has(Feature::ApiDocs) {
        content.push_str(
            r#"
// Swagger documentation
app.use('/api-docs', swaggerUi.serve, swaggerUi.setup(swaggerSpec));
"#,
        );
    }

    content.push_str(
        r#"
// Routes
app.get('/', (req, res) => {
  res.json({
    success: true,
"#,
    );
    content.push_str(&format!(
        "    message: 'Welcome to {} API',\n",
        config.name()
    ));
    content.push_str(
        r#"    version: '1.0.0'
  });
});

app.use('/api/health', healthRoutes);

// 404 handler
app.use('*', (req, res) => {
  res.status(404).json({
    success: false,
    message: 'Route not found'
  });
});

// Global error handler (must be last)
app.use(errorHandler);

// Start server
const PORT = process.env.PORT || 5000;

app.listen(PORT, () => {
  console.log(`🚀 Server running on port ${PORT}`);
  console.log(`📝 Environment: ${process.env.NODE_ENV || 'development'}`);
"#,
    );

    if config.has(Feature::ApiDocs) {
        content.push_str("  console.log(`📚 API Docs: http://localhost:${PORT}/api-docs`);\n");
    }

    content.push_str(
        r#"});

export default app;
"#,
    );

    content
}

/// `src/controllers/healthController.js` content.
pub fn health_controller() -> String {
    String::from(
        r#"/**
 * Health Check Controller
 * Simple endpoints to verify server is running
 */

/**
 * @desc    Get server health status
 * @route   GET /api/health
 * @access  Public
 */
export const healthCheck = async (req, res) => {
  res.status(200).json({
    success: true,
    message: 'Server is healthy',
    timestamp: new Date().toISOString(),
    uptime: process.uptime()
  });
};

/**
 * @desc    Get detailed server info
 * @route   GET /api/health/info
 * @access  Public
 */
export const serverInfo = async (req, res) => {
  res.status(200).json({
    success: true,
    data: {
      nodeVersion: process.version,
      platform: process.platform,
      memory: {
        total: `${Math.round(process.memoryUsage().heapTotal / 1024 / 1024)}MB`,
        used: `${Math.round(process.memoryUsage().heapUsed / 1024 / 1024)}MB`
      },
      uptime: `${Math.floor(process.uptime())}s`
    }
  });
};
"#,
    )
}

/// `src/routes/healthRoutes.js` content. The `@swagger` annotations are
/// plain JSDoc; they are inert without the docs toggle and picked up by
/// swagger-jsdoc with it, so the file is configuration-independent.
pub fn health_routes() -> String {
    String::from(
        r#"/**
 * Health Routes
 * Routes for health check endpoints
 */

import express from 'express';
import { healthCheck, serverInfo } from '../controllers/healthController.js';

const router = express.Router();

/**
 * @swagger
 * /api/health:
 *   get:
 *     summary: Health check endpoint
 *     tags: [Health]
 *     responses:
 *       200:
 *         description: Server is healthy
 */
router.get('/', healthCheck);

/**
 * @swagger
 * /api/health/info:
 *   get:
 *     summary: Get server information
 *     tags: [Health]
 *     responses:
 *       200:
 *         description: Server information
 */
router.get('/info', serverInfo);

export default router;
"#,
    )
}

/// `src/middleware/errorHandler.js` content.
pub fn error_middleware() -> String {
    String::from(
        r#"/**
 * Global Error Handler Middleware
 * Catches and formats all errors
 */

/**
 * Error handling middleware
 */
export const errorHandler = (err, req, res, next) => {
  let statusCode = err.statusCode || 500;
  let message = err.message || 'Internal Server Error';

  // Mongoose bad ObjectId
  if (err.name === 'CastError') {
    statusCode = 400;
    message = 'Resource not found';
  }

  // Mongoose duplicate key
  if (err.code === 11000) {
    statusCode = 400;
    message = 'Duplicate field value entered';
  }

  // Mongoose validation error
  if (err.name === 'ValidationError') {
    statusCode = 400;
    message = Object.values(err.errors)
      .map(val => val.message)
      .join(', ');
  }

  // JWT errors
  if (err.name === 'JsonWebTokenError') {
    statusCode = 401;
    message = 'Invalid token';
  }

  if (err.name === 'TokenExpiredError') {
    statusCode = 401;
    message = 'Token expired';
  }

  res.status(statusCode).json({
    success: false,
    message,
    ...(process.env.NODE_ENV === 'development' && { stack: err.stack })
  });
};

/**
 * Async handler wrapper to avoid try-catch blocks
 */
export const asyncHandler = (fn) => (req, res, next) =>
  Promise.resolve(fn(req, res, next)).catch(next);
"#,
    )
}

/// `src/middleware/auth.js` content. Carries the password hashing helpers
/// alongside token handling so bcryptjs is exercised by every
/// configuration, not only by the document-store model.
pub fn auth_middleware() -> String {
    String::from(
        r#"/**
 * Authentication Middleware
 * JWT-based authentication with password hashing helpers
 */

import jwt from 'jsonwebtoken';
import bcrypt from 'bcryptjs';

/**
 * Protect routes - verify JWT token
 */
export const protect = async (req, res, next) => {
  let token;

  // Check for token in headers
  if (
    req.headers.authorization &&
    req.headers.authorization.startsWith('Bearer')
  ) {
    token = req.headers.authorization.split(' ')[1];
  }
  // Check for token in cookies
  else if (req.cookies.token) {
    token = req.cookies.token;
  }

  // Make sure token exists
  if (!token) {
    return res.status(401).json({
      success: false,
      message: 'Not authorized to access this route'
    });
  }

  try {
    // Verify token
    const decoded = jwt.verify(token, process.env.JWT_SECRET);

    // Add user info to request
    req.user = decoded;

    next();
  } catch (error) {
    return res.status(401).json({
      success: false,
      message: 'Not authorized to access this route'
    });
  }
};

/**
 * Generate JWT token
 */
export const generateToken = (userId) => {
  return jwt.sign(
    { id: userId },
    process.env.JWT_SECRET,
    { expiresIn: process.env.JWT_EXPIRE || '7d' }
  );
};

/**
 * Hash a password before persisting it
 */
export const hashPassword = async (password) => {
  const salt = await bcrypt.genSalt(10);
  return bcrypt.hash(password, salt);
};

/**
 * Compare a candidate password with a stored hash
 */
export const comparePassword = async (candidate, hashed) => {
  return bcrypt.compare(candidate, hashed);
};
"#,
    )
}

/// `src/models/User.js` content. Planned only for the document store; the
/// relational choices define their models through the Prisma schema instead.
pub fn user_model() -> String {
    String::from(
        r#"/**
 * User Model (Mongoose)
 * MongoDB user schema and model
 */

import mongoose from 'mongoose';
import bcrypt from 'bcryptjs';

const userSchema = new mongoose.Schema(
  {
    name: {
      type: String,
      required: [true, 'Please provide a name'],
      trim: true
    },
    email: {
      type: String,
      required: [true, 'Please provide an email'],
      unique: true,
      lowercase: true,
      match: [
        /^\w+([\.-]?\w+)*@\w+([\.-]?\w+)*(\.\w{2,3})+$/,
        'Please provide a valid email'
      ]
    },
    password: {
      type: String,
      required: [true, 'Please provide a password'],
      minlength: 6,
      select: false
    },
    role: {
      type: String,
      enum: ['user', 'admin'],
      default: 'user'
    },
    isActive: {
      type: Boolean,
      default: true
    }
  },
  {
    timestamps: true
  }
);

// Hash password before saving
userSchema.pre('save', async function (next) {
  if (!this.isModified('password')) {
    next();
  }

  const salt = await bcrypt.genSalt(10);
  this.password = await bcrypt.hash(this.password, salt);
});

// Compare password method
userSchema.methods.comparePassword = async function (enteredPassword) {
  return await bcrypt.compare(enteredPassword, this.password);
};

const User = mongoose.model('User', userSchema);

export default User;
"#,
    )
}

/// `src/utils/validation.js` content. Planned only when the
/// schema-validation toggle is on.
pub fn validation_schemas() -> String {
    String::from(
        r#"/**
 * Zod Validation Schemas
 * Type-safe validation for request data
 */

import { z } from 'zod';

/**
 * User registration validation schema
 */
export const registerSchema = z.object({
  name: z.string().min(2, 'Name must be at least 2 characters'),
  email: z.string().email('Invalid email address'),
  password: z.string().min(6, 'Password must be at least 6 characters')
});

/**
 * User login validation schema
 */
export const loginSchema = z.object({
  email: z.string().email('Invalid email address'),
  password: z.string().min(1, 'Password is required')
});

/**
 * Validation middleware wrapper
 */
export const validate = (schema) => {
  return async (req, res, next) => {
    try {
      await schema.parseAsync(req.body);
      next();
    } catch (error) {
      if (error instanceof z.ZodError) {
        return res.status(400).json({
          success: false,
          message: 'Validation error',
          errors: error.errors.map(err => ({
            field: err.path.join('.'),
            message: err.message
          }))
        });
      }
      next(error);
    }
  };
};
"#,
    )
}
